//! Example demonstrating basic Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator`, optionally with a fixed seed
//! - Generate a puzzle at a chosen size and ELO
//! - Display the problem, solution, and clue count
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a size and difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size sixteen --elo 1800
//! ```
//!
//! Reproduce a run exactly:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```

use clap::{Parser, ValueEnum};
use gridoku_core::{Grid, GridSize};
use gridoku_generator::PuzzleGenerator;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SizeArg {
    Nine,
    Sixteen,
}

impl From<SizeArg> for GridSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::Nine => GridSize::Nine,
            SizeArg::Sixteen => GridSize::Sixteen,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty knob in [1000, 2000]; higher means fewer clues.
    #[arg(long, value_name = "ELO", default_value_t = 1500)]
    elo: i32,

    /// Board size.
    #[arg(long, value_enum, default_value = "nine")]
    size: SizeArg,

    /// RNG seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut generator = match args.seed {
        Some(seed) => PuzzleGenerator::with_seed(seed),
        None => PuzzleGenerator::new(),
    };
    let puzzle = generator.generate(args.size.into(), args.elo);

    println!("Clues:");
    println!("  {}", puzzle.clue_count);
    println!();
    println!("Problem:");
    print_grid(&puzzle.problem);
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution);
}

fn print_grid(grid: &Grid) {
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
}

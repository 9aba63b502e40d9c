//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for an interactive-game blank count
//! - Generate a random puzzle, or reproduce one from a seed or phrase
//! - Display the seed, problem, and solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose the number of blank cells (the interactive game accepts 31-49):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --blanks 35
//! ```
//!
//! Reproduce a puzzle from a previously printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily puzzle"
//! ```

use clap::Parser;
use ninefold_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells to blank out (31-49, the interactive game range).
    #[arg(long, value_name = "COUNT", default_value_t = 40, value_parser = parse_blanks)]
    blanks: usize,

    /// Reproduce a specific puzzle from a 64-character hexadecimal seed.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Derive the seed from an arbitrary phrase.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,
}

fn parse_blanks(s: &str) -> Result<usize, String> {
    let count: usize = s
        .parse()
        .map_err(|_| format!("{s} is not a number of blank cells"))?;
    if (31..=49).contains(&count) {
        Ok(count)
    } else {
        Err("Invalid input. Number of blanks should be within range [30, 50].".to_owned())
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = PuzzleGenerator::new(args.blanks).expect("blank count validated by clap");
    let seed = match (args.seed, &args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };

    log::info!("generating puzzle: blanks={} seed={seed}", args.blanks);
    let puzzle = generator.generate_with_seed(seed);
    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}

//! Sudoku puzzle generation for the Ninefold toolkit.
//!
//! The generator starts from a fixed complete solution and applies three
//! randomized, validity-preserving transforms: permuting the rows within
//! each band, permuting the columns within each stack, and relabeling the
//! digits with a random bijection. It then carves out a requested number of
//! blank cells to form the problem grid.
//!
//! Every puzzle is identified by a 256-bit [`PuzzleSeed`], so any generated
//! puzzle can be reproduced exactly from its seed.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(40).expect("valid blank count");
//! let puzzle = generator.generate();
//!
//! assert_eq!(puzzle.problem.count_empty(), 40);
//! assert!(puzzle.solution.is_complete());
//!
//! // The seed reproduces the puzzle exactly
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again, puzzle);
//! ```
//!
//! # Limits
//!
//! The generator guarantees a structurally valid, solvable problem (the
//! solution it was carved from is returned alongside). It does **not**
//! guarantee that the problem has a unique solution.

mod generator;
mod seed;

pub use self::{
    generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};

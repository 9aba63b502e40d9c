//! Core data structures for the Ninefold Sudoku toolkit.
//!
//! This crate provides the fundamental types for representing a 9×9 Sudoku
//! board and checking it against the Sudoku rules. These structures are used
//! by the puzzle generator and the game session layer.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`position`]: Board position (x, y) coordinates, bands, and stacks
//! - [`digit_set`]: A 9-bit set of digits for duplicate detection
//! - [`house`]: Rows, columns, and 3×3 boxes as iterable units
//! - [`digit_grid`]: The 9×9 board itself, with completion and consistency
//!   checks
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! assert!(grid.is_consistent()); // No duplicate in any row/column/box
//! assert!(!grid.is_complete()); // 80 cells are still blank
//! ```

pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_grid::{DigitGrid, ParseDigitGridError},
    digit_set::DigitSet,
    house::House,
    position::Position,
};

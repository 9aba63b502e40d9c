//! Game session management for the Ninefold Sudoku toolkit.
//!
//! A [`Game`] owns the board state of one puzzle session: the given cells
//! from the generated problem, the player's entries, and the stored
//! solution. Givens are fixed for the lifetime of the session; every
//! mutation goes through the session so that invariant holds by
//! construction.
//!
//! Transient presentation state, such as which cell is currently selected,
//! belongs to the caller (typically an `Option<Position>`), not to the
//! session.
//!
//! # Examples
//!
//! ```
//! use ninefold_game::Game;
//! use ninefold_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(40).expect("valid blank count");
//! let game = Game::new(generator.generate());
//!
//! // Only the 40 blanked cells accept input
//! assert!(!game.is_solved());
//! ```

mod cell_state;
mod game;

pub use self::{
    cell_state::CellState,
    game::{Game, GameError},
};

//! The game session.

use derive_more::{Display, Error};
use ninefold_core::{Digit, DigitGrid, Position};
use ninefold_generator::GeneratedPuzzle;

use crate::CellState;

/// Errors returned by game session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A mutation targeted a given cell.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
}

/// A Sudoku game session.
///
/// Manages the board state of one puzzle: given (fixed) cells and player
/// input. All mutation goes through [`set_digit`] and [`clear_cell`], which
/// reject writes to given cells, so the fixed cells of the puzzle can never
/// change once the session exists.
///
/// [`set_digit`]: Game::set_digit
/// [`clear_cell`]: Game::clear_cell
///
/// # Example
///
/// ```
/// use ninefold_game::Game;
/// use ninefold_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(40).expect("valid blank count");
/// let game = Game::new(generator.generate());
///
/// assert!(!game.is_solved()); // Newly created game is not solved
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
}

impl Game {
    /// Creates a new game session from a generated puzzle.
    ///
    /// Filled cells of the problem grid become given cells; the cells the
    /// generator blanked out become empty, editable cells.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self { cells, solution }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }

    /// Returns whether the cell at `pos` accepts player input.
    ///
    /// Editable cells are exactly the cells the generator blanked out.
    #[must_use]
    pub fn is_editable(&self, pos: Position) -> bool {
        !self.cell(pos).is_given()
    }

    /// Returns the stored solution grid for this puzzle.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Places a player digit at `pos`.
    ///
    /// If the cell is empty it becomes filled; if it already holds player
    /// input, the digit is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` is a given
    /// cell.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player digit at `pos`.
    ///
    /// Clearing an already-empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` is a given
    /// cell.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Empty;
        Ok(())
    }

    /// Returns the current board as a plain digit grid.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    /// Checks if the game is solved.
    ///
    /// A game is solved when every cell is filled and no row, column, or
    /// 3×3 box contains a duplicate. Any valid completion counts, not just
    /// the stored solution, which handles problems with multiple solutions
    /// correctly.
    ///
    /// This is a pure check intended to be called after every input event
    /// (or once per frame).
    ///
    /// # Example
    ///
    /// ```
    /// use ninefold_core::Position;
    /// use ninefold_game::Game;
    /// use ninefold_generator::PuzzleGenerator;
    ///
    /// let generator = PuzzleGenerator::new(40).expect("valid blank count");
    /// let puzzle = generator.generate();
    /// let mut game = Game::new(puzzle.clone());
    ///
    /// // Fill all empty cells from the solution
    /// for pos in Position::ALL {
    ///     if game.cell(pos).is_empty() {
    ///         let digit = puzzle.solution[pos].expect("solution is complete");
    ///         game.set_digit(pos, digit).unwrap();
    ///     }
    /// }
    ///
    /// assert!(game.is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.to_digit_grid().is_complete()
    }
}

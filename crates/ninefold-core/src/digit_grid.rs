//! The 9×9 board and the Sudoku rule checks.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, House, Position};

/// A 9×9 grid of digits in which blank cells are `None`.
///
/// Cells are stored in row-major order. The grid itself places no
/// restrictions on which cells may be written; the game session layer is
/// responsible for keeping given cells fixed.
///
/// # String form
///
/// Grids convert to and from an 81-character string, one cell per
/// character in row-major order, `1`-`9` for digits and `.` for blanks:
///
/// ```
/// use ninefold_core::DigitGrid;
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid.count_filled(), 1);
/// assert_eq!(grid.to_string().len(), 81);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates a grid with all 81 cells blank.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is blank.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or blanks the cell at `pos`.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the number of blank cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        81 - self.count_filled()
    }

    /// Checks whether the grid is **consistent**: no row, column, or box
    /// contains a duplicate among its filled cells.
    ///
    /// Blank cells are ignored, so a partially-filled grid can be
    /// consistent. This is the invariant the generator guarantees for every
    /// problem grid it produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D5));
    /// assert!(grid.is_consistent());
    ///
    /// // A second 5 in the same row is a conflict
    /// grid.set(Position::new(8, 0), Some(Digit::D5));
    /// assert!(!grid.is_consistent());
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        for house in House::ALL {
            let mut seen = DigitSet::new();
            for pos in house.positions() {
                if let Some(digit) = self.get(pos)
                    && !seen.insert(digit)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Checks whether the grid is **complete**: every cell is filled and
    /// every row, column, and 3×3 box is a permutation of the digits 1-9.
    ///
    /// This is a pure check with no side effects; it returns `false` (never
    /// an error) for partially-filled grids, so it can be called after every
    /// input event.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::DigitGrid;
    ///
    /// assert!(!DigitGrid::new().is_complete()); // Blank grid
    ///
    /// let solved: DigitGrid = "\
    ///     123456789456789123789123456\
    ///     234567891567891234891234567\
    ///     345678912678912345912345678"
    ///     .parse()
    ///     .unwrap();
    /// assert!(solved.is_complete());
    /// ```
    #[must_use]
    pub fn is_complete(&self) -> bool {
        // A full grid whose houses are duplicate-free holds nine distinct
        // digits per house, which is exactly a permutation of 1-9.
        self.cells.iter().all(Option::is_some) && self.is_consistent()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseDigitGridError {
    /// The string is not exactly 81 characters long.
    #[display("grid string must be exactly 81 characters")]
    BadLength,
    /// The string contains a character other than `1`-`9` or `.`.
    #[display("invalid character {_0:?} in grid string")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for DigitGrid {
    type Err = ParseDigitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut chars = s.chars();
        for cell in &mut cells {
            let c = chars.next().ok_or(ParseDigitGridError::BadLength)?;
            *cell = match c {
                '.' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(ParseDigitGridError::InvalidCharacter(c)),
            };
        }
        if chars.next().is_some() {
            return Err(ParseDigitGridError::BadLength);
        }
        Ok(Self { cells })
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

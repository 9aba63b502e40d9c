//! Per-cell session state.

use derive_more::IsVariant;
use ninefold_core::Digit;

/// The state of a single cell in a game session.
///
/// `Given` cells come from the generated problem and never change for the
/// lifetime of the session; they are the fixed cells of the puzzle. The
/// cells the generator blanked out start as `Empty` and move between
/// `Empty` and `Filled` as the player edits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A fixed cell from the generated problem.
    Given(Digit),
    /// A player-entered digit.
    Filled(Digit),
    /// No digit entered yet.
    Empty,
}

impl CellState {
    /// Returns the digit held by this cell, if any.
    #[must_use]
    pub const fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_and_digit_access() {
        let given = CellState::Given(Digit::D3);
        assert!(given.is_given());
        assert!(!given.is_filled());
        assert_eq!(given.as_digit(), Some(Digit::D3));

        let filled = CellState::Filled(Digit::D7);
        assert!(filled.is_filled());
        assert_eq!(filled.as_digit(), Some(Digit::D7));

        let empty = CellState::Empty;
        assert!(empty.is_empty());
        assert_eq!(empty.as_digit(), None);
    }
}

//! Rows, columns, and boxes.

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// The Sudoku rules constrain exactly these 27 cell groups: each house of a
/// complete board must contain every digit exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the nine positions contained in this house.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{House, Position};
    ///
    /// let row = House::Row { y: 2 };
    /// assert_eq!(row.positions()[0], Position::new(0, 2));
    /// assert_eq!(row.positions()[8], Position::new(8, 2));
    /// ```
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            self.position_from_cell_index(i)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_houses_cover_each_cell_three_times() {
        // Every cell belongs to exactly one row, one column, and one box.
        let mut coverage = [0_u32; 81];
        for house in House::ALL {
            for pos in house.positions() {
                coverage[pos.index()] += 1;
            }
        }
        assert!(coverage.iter().all(|&count| count == 3));
    }

    #[test]
    fn test_box_positions_align_to_band_and_stack() {
        for house in House::BOXES {
            let House::Box { index } = house else {
                panic!("BOXES contains a non-box house");
            };
            for pos in house.positions() {
                assert_eq!(pos.box_index(), index);
                assert_eq!(pos.band(), index / 3);
                assert_eq!(pos.stack(), index % 3);
            }
        }
    }

    #[test]
    fn test_house_tables() {
        assert_eq!(House::ALL.len(), 27);
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }
}

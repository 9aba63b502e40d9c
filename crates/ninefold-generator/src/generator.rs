//! Symmetry-shuffle puzzle generation.

use derive_more::{Display, Error};
use ninefold_core::{Digit, DigitGrid, Position};
use rand::{Rng, seq::SliceRandom as _, seq::index};

use crate::PuzzleSeed;

/// Cell values of a complete solution, `[row][column]`, digits 1-9.
type Cells = [[u8; 9]; 9];

/// Error returned when constructing a [`PuzzleGenerator`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GeneratorError {
    /// The requested number of blank cells exceeds the board capacity.
    #[display("number of blank cells must be at most 80, got {requested}")]
    BlankCountOutOfRange {
        /// The rejected blank count.
        requested: usize,
    },
}

/// A puzzle produced by [`PuzzleGenerator`].
///
/// The problem grid is the solution grid with a fixed number of cells
/// blanked out; filled problem cells always agree with the solution. The
/// seed regenerates this exact puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle to solve, with blank cells for the player to fill.
    pub problem: DigitGrid,
    /// The complete solution the problem was carved from.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates Sudoku puzzles with a fixed number of blank cells.
///
/// Generation works by shuffling a known complete solution with
/// validity-preserving transforms, then blanking cells:
///
/// 1. The three rows within each band (rows 0-2, 3-5, 6-8) are permuted
///    independently.
/// 2. The three columns within each stack (columns 0-2, 3-5, 6-8) are
///    permuted independently.
/// 3. The digits are relabeled with a uniformly random bijection of 1-9.
/// 4. The requested number of distinct cells, sampled uniformly without
///    replacement, is blanked out of the problem grid.
///
/// Each transform maps valid solutions to valid solutions, and blanking
/// only removes information, so the problem grid is always consistent.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(40).expect("valid blank count");
/// let puzzle = generator.generate();
/// assert_eq!(puzzle.problem.count_empty(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    blank_cells: usize,
}

impl PuzzleGenerator {
    /// The largest accepted blank count. One given always remains.
    pub const MAX_BLANK_CELLS: usize = 80;

    /// Creates a generator that blanks out `blank_cells` cells per puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::BlankCountOutOfRange`] if `blank_cells`
    /// exceeds [`Self::MAX_BLANK_CELLS`]. The caller is expected to collect
    /// a fresh count before retrying; the generator never retries
    /// internally.
    pub const fn new(blank_cells: usize) -> Result<Self, GeneratorError> {
        if blank_cells > Self::MAX_BLANK_CELLS {
            return Err(GeneratorError::BlankCountOutOfRange {
                requested: blank_cells,
            });
        }
        Ok(Self { blank_cells })
    }

    /// Returns the number of cells blanked out of each generated puzzle.
    #[must_use]
    pub const fn blank_cells(&self) -> usize {
        self.blank_cells
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed and blank count always produce the same puzzle, which
    /// makes generation reproducible for tests and shareable puzzles.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        let mut cells = base_solution();
        shuffle_band_rows(&mut cells, &mut rng);
        shuffle_stack_columns(&mut cells, &mut rng);
        relabel_digits(&mut cells, &mut rng);

        let solution = to_digit_grid(&cells);
        let mut problem = solution.clone();
        for cell_index in index::sample(&mut rng, 81, self.blank_cells) {
            problem.set(Position::from_index(cell_index), None);
        }

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

/// Builds the fixed base solution `((r*3 + r/3 + c) % 9) + 1`.
fn base_solution() -> Cells {
    let mut cells = [[0_u8; 9]; 9];
    for (r, row) in cells.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let value = ((r * 3 + r / 3 + c) % 9 + 1) as u8;
            *cell = value;
        }
    }
    cells
}

/// Permutes the three rows within each band independently.
fn shuffle_band_rows<R: Rng + ?Sized>(cells: &mut Cells, rng: &mut R) {
    for band in 0..3 {
        cells[band * 3..band * 3 + 3].shuffle(rng);
    }
}

/// Permutes the three columns within each stack independently.
fn shuffle_stack_columns<R: Rng + ?Sized>(cells: &mut Cells, rng: &mut R) {
    for stack in 0..3 {
        let mut order = [0_usize, 1, 2];
        order.shuffle(rng);
        for row in cells.iter_mut() {
            let group = [row[stack * 3], row[stack * 3 + 1], row[stack * 3 + 2]];
            for (offset, &source) in order.iter().enumerate() {
                row[stack * 3 + offset] = group[source];
            }
        }
    }
}

/// Applies a uniformly random bijection of 1-9 to every cell.
fn relabel_digits<R: Rng + ?Sized>(cells: &mut Cells, rng: &mut R) {
    let mut relabeled = [1_u8, 2, 3, 4, 5, 6, 7, 8, 9];
    relabeled.shuffle(rng);
    for row in cells.iter_mut() {
        for cell in row.iter_mut() {
            *cell = relabeled[usize::from(*cell - 1)];
        }
    }
}

fn to_digit_grid(cells: &Cells) -> DigitGrid {
    let mut grid = DigitGrid::new();
    for pos in Position::ALL {
        let value = cells[usize::from(pos.y())][usize::from(pos.x())];
        grid.set(pos, Some(Digit::from_value(value)));
    }
    grid
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn seeded(blank_cells: usize, phrase: &str) -> GeneratedPuzzle {
        PuzzleGenerator::new(blank_cells)
            .expect("valid blank count")
            .generate_with_seed(PuzzleSeed::from_phrase(phrase))
    }

    #[test]
    fn test_base_solution_is_complete() {
        assert!(to_digit_grid(&base_solution()).is_complete());
    }

    #[test]
    fn test_blank_count_bounds() {
        assert!(PuzzleGenerator::new(0).is_ok());
        assert!(PuzzleGenerator::new(80).is_ok());
        assert_eq!(
            PuzzleGenerator::new(81),
            Err(GeneratorError::BlankCountOutOfRange { requested: 81 })
        );
        assert_eq!(
            PuzzleGenerator::new(usize::MAX),
            Err(GeneratorError::BlankCountOutOfRange {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn test_same_seed_reproduces_puzzle() {
        let first = seeded(40, "reproducible");
        let second = seeded(40, "reproducible");
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_seeds_produce_distinct_grids() {
        let first = seeded(40, "first");
        let second = seeded(40, "second");
        assert_ne!(first.solution, second.solution);
    }

    #[test]
    fn test_unseeded_calls_produce_distinct_grids() {
        let generator = PuzzleGenerator::new(40).expect("valid blank count");
        let first = generator.generate();
        let second = generator.generate();
        assert_ne!(first.seed, second.seed);
        assert_ne!(first.problem, second.problem);
    }

    #[test]
    fn test_zero_blanks_returns_the_solution() {
        let puzzle = seeded(0, "no blanks");
        assert_eq!(puzzle.problem, puzzle.solution);
        assert!(puzzle.problem.is_complete());
    }

    #[test]
    fn test_maximum_blanks_leaves_one_given() {
        let puzzle = seeded(80, "one given");
        assert_eq!(puzzle.problem.count_filled(), 1);
        assert!(puzzle.problem.is_consistent());
    }

    proptest! {
        #[test]
        fn generated_puzzles_uphold_the_contract(
            blank_cells in 0_usize..=80,
            bytes in any::<[u8; 32]>(),
        ) {
            let generator = PuzzleGenerator::new(blank_cells).expect("valid blank count");
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes));

            // Exact blank count, rest filled
            prop_assert_eq!(puzzle.problem.count_empty(), blank_cells);
            prop_assert_eq!(puzzle.problem.count_filled(), 81 - blank_cells);

            // Solution is a valid complete grid; problem is a consistent
            // subset of it
            prop_assert!(puzzle.solution.is_complete());
            prop_assert!(puzzle.problem.is_consistent());
            for pos in Position::ALL {
                if let Some(digit) = puzzle.problem[pos] {
                    prop_assert_eq!(Some(digit), puzzle.solution[pos]);
                }
            }
        }

        #[test]
        fn generation_is_deterministic_per_seed(
            blank_cells in 0_usize..=80,
            bytes in any::<[u8; 32]>(),
        ) {
            let generator = PuzzleGenerator::new(blank_cells).expect("valid blank count");
            let seed = PuzzleSeed::from_bytes(bytes);
            prop_assert_eq!(
                generator.generate_with_seed(seed),
                generator.generate_with_seed(seed)
            );
        }
    }
}

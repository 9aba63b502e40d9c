//! Seeds identifying generated puzzles.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed identifying a generated puzzle.
///
/// Seeds display as 64 lowercase hexadecimal characters and parse back from
/// the same form, so a puzzle can be reported, stored, and regenerated from
/// a single string.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///         .parse()
///         .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_generator::PuzzleSeed;
    ///
    /// let seed = PuzzleSeed::from_phrase("daily puzzle 2024-03-01");
    /// assert_eq!(seed, PuzzleSeed::from_phrase("daily puzzle 2024-03-01"));
    /// assert_ne!(seed, PuzzleSeed::from_phrase("daily puzzle 2024-03-02"));
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        Self {
            bytes: digest.into(),
        }
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self {
            bytes: rand::rng().random(),
        }
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Builds the deterministic random number generator driven by this seed.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.bytes)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be exactly 64 hexadecimal characters")]
    BadLength,
    /// The string contains a non-hexadecimal character.
    #[display("invalid hexadecimal character {_0:?} in seed")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParseSeedError::BadLength);
        }
        let mut bytes = [0_u8; 32];
        for (i, c) in s.chars().enumerate() {
            let nibble = c
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidCharacter(c))?;
            #[expect(clippy::cast_possible_truncation)]
            let nibble = nibble as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | nibble;
        }
        Ok(Self { bytes })
    }
}

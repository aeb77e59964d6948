//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the chess board, represented as (file, rank).
///
/// Coordinates are signed so move generation can step off the edge and
/// test the result with [`Square::is_on_board`]. Squares built through
/// [`Square::new`], [`TryFrom`] or [`FromStr`] are always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (file, rank)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(file: i8, rank: i8) -> Option<Self> {
        let sq = Square(file, rank);
        sq.is_on_board().then_some(sq)
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> i8 {
        self.0
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 >= 0 && self.0 < BOARD_SIZE && self.1 >= 0 && self.1 < BOARD_SIZE
    }

    /// Square displaced by `(df, dr)`. The result may lie off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Square(self.0.saturating_add(df), self.1.saturating_add(dr))
    }

    /// Index 0-63 (a1=0, b1=1, ..., h8=63), or `None` off the board
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.1 as usize * 8 + self.0 as usize)
        } else {
            None
        }
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square((idx % 8) as i8, (idx / 8) as i8)
    }

    /// All 64 squares, a1 first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Rank-major, matching index order
        (self.1, self.0).cmp(&(other.1, other.0))
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (i8, i8)) -> Result<Self, Self::Error> {
        if !(0..BOARD_SIZE).contains(&file) {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if !(0..BOARD_SIZE).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square(file, rank))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as i8,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as i8,
            _ => return Err(invalid()),
        };

        Ok(Square(file, rank))
    }
}

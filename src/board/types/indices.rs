//! Stable handles into the board's piece arena.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// Handle to a piece slot on a [`Board`](crate::board::Board).
///
/// Slots are never reused, so a handle to a captured piece stays invalid
/// instead of silently aliasing another piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece removed from the board by a commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Captured {
    pub id: PieceId,
    pub piece: Piece,
}

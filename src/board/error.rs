//! Error types for board operations.

use std::fmt;

use super::{PieceId, Square};

/// Error type for placement string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement string has too few parts (needs piece layout and side to move)
    TooFewParts { found: usize },
    /// Invalid piece character in the layout
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// More than eight ranks in the layout
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Layout does not describe exactly eight ranks
    WrongRankCount { found: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::TooFewParts { found } => {
                write!(f, "Placement must have 2 parts, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            PlacementError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in placement")
            }
            PlacementError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            PlacementError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: i8 },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: i8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for structurally impossible commits.
///
/// Chess legality is never checked by a commit; these only guard the
/// arena and the board bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The handle does not name a live piece (never issued, or captured)
    UnknownPiece { id: PieceId },
    /// The destination lies outside the 8x8 board
    OffBoard { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::UnknownPiece { id } => {
                write!(f, "No live piece with handle {id}")
            }
            MoveError::OffBoard { square } => {
                write!(f, "Destination {square} is off the board")
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_error_too_few_parts() {
        let err = PlacementError::TooFewParts { found: 1 };
        assert!(err.to_string().contains('1'));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_placement_error_invalid_piece() {
        let err = PlacementError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_placement_error_invalid_side() {
        let err = PlacementError::InvalidSideToMove {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_square_error_bounds() {
        assert!(SquareError::FileOutOfBounds { file: 9 }
            .to_string()
            .contains('9'));
        assert!(SquareError::RankOutOfBounds { rank: -2 }
            .to_string()
            .contains("-2"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::UnknownPiece { id: PieceId(7) };
        assert!(err.to_string().contains("#7"));
        let err = MoveError::OffBoard {
            square: Square(8, 0),
        };
        assert!(err.to_string().contains("(8, 0)"));
    }

    #[test]
    fn test_error_clone() {
        let err = PlacementError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}

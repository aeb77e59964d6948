//! Placement strings: FEN piece-placement field plus side to move.
//!
//! `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"` is the starting
//! position. Castling, en passant and clocks are not part of this game, so
//! any fields after the side to move are ignored.

use super::error::PlacementError;
use super::{Board, PieceKind, Side, Square};

/// Placement string of the standard starting position.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl Board {
    /// Parse a board from a placement string.
    ///
    /// Returns an error if the string is malformed.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = placement.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(PlacementError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() > 8 {
            return Err(PlacementError::InvalidRank { rank: 8 });
        }
        if ranks.len() < 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.into_iter().enumerate() {
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(PlacementError::InvalidPiece { char: c });
                    }
                    file += skip as usize;
                    continue;
                }
                let side = if c.is_ascii_uppercase() {
                    Side::White
                } else {
                    Side::Black
                };
                let kind = PieceKind::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(PlacementError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                board.set_piece(Square(file as i8, 7 - rank_idx as i8), side, kind);
                file += 1;
            }
            if file > 8 {
                return Err(PlacementError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        let side = match parts[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => {
                return Err(PlacementError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        board.set_side_to_move(side);

        Ok(board)
    }

    /// Render the board as a placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.kind.to_placement_char(piece.side));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push(match self.side_to_move {
            Side::White => 'w',
            Side::Black => 'b',
        });
        out
    }
}

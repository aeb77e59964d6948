//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing placement
//! strings.
//!
//! # Example
//! ```
//! use chess_sim::board::{BoardBuilder, PieceKind, Side, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(4, 0), Side::White, PieceKind::King)
//!     .piece(Square(4, 7), Side::Black, PieceKind::King)
//!     .piece(Square(0, 1), Side::White, PieceKind::Pawn)
//!     .side_to_move(Side::White)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::state::BACK_RANK;
use super::{Board, PieceKind, Side, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Side, PieceKind)>,
    side_to_move: Side,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Side::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        for side in Side::BOTH {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let file = file as i8;
                builder.pieces.push((Square(file, side.back_rank()), side, kind));
                builder
                    .pieces
                    .push((Square(file, side.pawn_home_rank()), side, PieceKind::Pawn));
            }
        }

        builder
    }

    /// Place a piece on the board. Off-board squares are ignored.
    #[must_use]
    pub fn piece(mut self, square: Square, side: Side, kind: PieceKind) -> Self {
        if !square.is_on_board() {
            return self;
        }
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, side, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, side, kind) in self.pieces {
            board.set_piece(square, side, kind);
        }
        board.set_side_to_move(self.side_to_move);

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        let standard = Board::new();

        assert_eq!(built.to_placement(), standard.to_placement());
        assert_eq!(built.piece_count(), 32);
    }

    #[test]
    fn test_two_kings() {
        let board = BoardBuilder::new()
            .piece(Square(4, 0), Side::White, PieceKind::King)
            .piece(Square(4, 7), Side::Black, PieceKind::King)
            .build();

        assert!(board.has_king_at(Square(4, 0)));
        assert!(board.has_king_at(Square(4, 7)));
        assert!(board.is_square_empty(Square(0, 0)));
    }

    #[test]
    fn test_side_to_move() {
        let board = BoardBuilder::new()
            .piece(Square(4, 0), Side::White, PieceKind::King)
            .side_to_move(Side::Black)
            .build();

        assert_eq!(board.side_to_move(), Side::Black);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(0, 0)) // Remove white rook on a1
            .build();

        assert!(board.piece_at(Square(0, 0)).is_none());
        assert!(board.piece_at(Square(1, 0)).is_some()); // Knight still there
    }

    #[test]
    fn test_later_piece_replaces_earlier() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Side::White, PieceKind::Rook)
            .piece(Square(3, 3), Side::Black, PieceKind::Knight)
            .piece(Square(9, 3), Side::Black, PieceKind::Queen)
            .build();

        assert_eq!(board.piece_count(), 1);
        let piece = board.piece_at(Square(3, 3)).unwrap();
        assert_eq!((piece.side, piece.kind), (Side::Black, PieceKind::Knight));
    }
}

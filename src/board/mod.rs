//! Board representation and move legality.
//!
//! Pieces live in a slot arena addressed by [`PieceId`]; a 64-entry square
//! index answers occupancy queries. Move generation covers the six piece
//! kinds without check, castling, en passant or promotion.
//!
//! # Example
//! ```
//! use chess_sim::board::{generate_moves, Board, PieceKind, Side, Square};
//!
//! let mut board = Board::new();
//! let moves = generate_moves(PieceKind::Pawn, Side::White, Square(4, 1), &board);
//! assert!(moves.contains(Square(4, 3)));
//!
//! let pawn = board.piece_id_at(Square(4, 1)).unwrap();
//! board.commit_move(pawn, Square(4, 3)).unwrap();
//! assert_eq!(board.side_to_move(), Side::Black);
//! ```

mod builder;
mod commit;
#[cfg(any(test, debug_assertions))]
mod debug;
mod error;
mod jump_tables;
mod movegen;
mod placement;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveError, PlacementError, SquareError};
pub use movegen::generate_moves;
pub use placement::START_PLACEMENT;
pub use state::Board;
pub use types::{
    Captured, MoveSet, MoveSetIntoIter, Piece, PieceId, PieceKind, Side, Square, BOARD_SIZE,
    MAX_DESTINATIONS,
};

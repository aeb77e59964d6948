//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_sim::board::prelude::*;
//! ```

pub use super::{
    generate_moves, Board, BoardBuilder, Captured, MoveError, MoveSet, Piece, PieceId, PieceKind,
    PlacementError, Side, Square, SquareError,
};

//! Core board types.
//!
//! This module contains the value types shared by the board and the move
//! generator:
//! - `PieceKind`, `Side` and `Piece` - what stands on a square
//! - `Square` - signed (file, rank) coordinates
//! - `PieceId` and `Captured` - arena handles and capture records
//! - `MoveSet` - destinations produced for one piece

mod indices;
mod moves;
mod piece;
mod square;

pub use indices::{Captured, PieceId};
pub use moves::{MoveSet, MoveSetIntoIter, MAX_DESTINATIONS};
pub use piece::{Piece, PieceKind, Side};
pub use square::{Square, BOARD_SIZE};

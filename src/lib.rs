pub mod board;
pub mod console;
pub mod session;

pub use board::{generate_moves, Board, MoveSet, Piece, PieceId, PieceKind, Side, Square};
pub use session::{DisplayConfig, PieceStyle, Session};

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::{BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS};

use super::{Board, MoveSet, Piece, PieceId, PieceKind, Side, Square};

/// Destinations for a piece of `kind` and `side` standing on `from`.
///
/// Pure: the board is only read. Whose turn it is plays no part; turn
/// order is enforced when a piece is picked up.
pub fn generate_moves(kind: PieceKind, side: Side, from: Square, board: &Board) -> MoveSet {
    board.generate_piece_moves(kind, side, from)
}

impl Board {
    pub(crate) fn generate_piece_moves(
        &self,
        kind: PieceKind,
        side: Side,
        from: Square,
    ) -> MoveSet {
        match kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, side),
            PieceKind::Rook => self.generate_sliding_moves(from, side, &ROOK_RAYS),
            PieceKind::Knight => self.generate_knight_moves(from, side),
            PieceKind::Bishop => self.generate_sliding_moves(from, side, &BISHOP_RAYS),
            PieceKind::Queen => self.generate_sliding_moves(from, side, &QUEEN_RAYS),
            PieceKind::King => self.generate_king_moves(from, side),
        }
    }

    /// Destinations for a piece value; its own square is the origin.
    pub fn moves_of(&self, piece: &Piece) -> MoveSet {
        self.generate_piece_moves(piece.kind, piece.side, piece.square)
    }

    /// Destinations for the live piece behind `id`; empty if it was captured.
    pub fn moves_for(&self, id: PieceId) -> MoveSet {
        self.piece(id)
            .map(|piece| self.moves_of(&piece))
            .unwrap_or_default()
    }

    /// On the board and either empty or held by the other side.
    #[inline]
    pub(crate) fn is_landing_candidate(&self, sq: Square, side: Side) -> bool {
        self.is_on_board(sq) && (self.is_square_empty(sq) || self.is_opponent(sq, side))
    }
}

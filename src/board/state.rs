use std::fmt;

use super::{Piece, PieceId, PieceKind, Side, Square};

/// Standard back-rank order, file a to file h.
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Debug)]
pub struct Board {
    /// Piece arena; a `None` slot is a captured piece. Slots are never reused.
    pub(crate) slots: Vec<Option<Piece>>,
    /// Square index -> occupying slot, kept in sync with `slots`
    pub(crate) mailbox: [Option<PieceId>; 64],
    pub(crate) side_to_move: Side,
}

impl Board {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for side in Side::BOTH {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let file = file as i8;
                board.set_piece(Square(file, side.back_rank()), side, kind);
                board.set_piece(Square(file, side.pawn_home_rank()), side, PieceKind::Pawn);
            }
        }
        board
    }

    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Board {
            slots: Vec::with_capacity(32),
            mailbox: [None; 64],
            side_to_move: Side::White,
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// True iff both coordinates lie in [0, 8).
    #[inline]
    pub fn is_on_board(&self, sq: Square) -> bool {
        sq.is_on_board()
    }

    /// True iff no live piece occupies `sq`. Off-board squares are empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.piece_id_at(sq).is_none()
    }

    /// True iff a live piece of the side opposite to `side` occupies `sq`.
    #[inline]
    pub fn is_opponent(&self, sq: Square, side: Side) -> bool {
        self.piece_at(sq).is_some_and(|p| p.side != side)
    }

    /// True iff a king of either side occupies `sq`.
    ///
    /// Only used to hide move indicators on king squares; capturing a king
    /// is still a legal commit.
    #[inline]
    pub fn has_king_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some_and(|p| p.kind == PieceKind::King)
    }

    #[inline]
    pub fn piece_id_at(&self, sq: Square) -> Option<PieceId> {
        sq.index().and_then(|idx| self.mailbox[idx])
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.piece_id_at(sq).and_then(|id| self.piece(id))
    }

    /// The live piece behind `id`, or `None` if it was captured or never existed.
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.slots.get(id.0).copied().flatten()
    }

    /// Live pieces with their handles, in slot order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Piece)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|piece| (PieceId(idx), piece)))
    }

    /// Live pieces belonging to `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (PieceId, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.side == side)
    }

    pub fn piece_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(_, p)| p.square)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Text diagram, rank 8 at the top, uppercase for White.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.piece_at(Square(file, rank)) {
                    Some(piece) => piece.kind.to_placement_char(piece.side),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}

use super::error::MoveError;
use super::{Board, Captured, Piece, PieceId, PieceKind, Side, Square};

impl Board {
    /// Put a new piece on `sq`, replacing whatever stood there.
    pub(crate) fn set_piece(&mut self, sq: Square, side: Side, kind: PieceKind) -> PieceId {
        debug_assert!(sq.is_on_board(), "cannot place a piece on {sq}");
        if let Some(previous) = self.piece_id_at(sq) {
            self.remove_piece(previous);
        }
        let id = PieceId(self.slots.len());
        self.slots.push(Some(Piece::new(kind, side, sq)));
        if let Some(idx) = sq.index() {
            self.mailbox[idx] = Some(id);
        }
        id
    }

    pub(crate) fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.slots.get_mut(id.0)?.take()?;
        if let Some(idx) = piece.square.index() {
            if self.mailbox[idx] == Some(id) {
                self.mailbox[idx] = None;
            }
        }
        Some(piece)
    }

    pub(crate) fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// Relocate `id` to `dest`, capturing any other piece standing there,
    /// then pass the turn.
    ///
    /// No chess legality is checked: callers validate `dest` against the
    /// piece's [`MoveSet`](crate::board::MoveSet) first. The board is left
    /// untouched if `id` is not a live piece or `dest` is off the board.
    pub fn commit_move(
        &mut self,
        id: PieceId,
        dest: Square,
    ) -> Result<Option<Captured>, MoveError> {
        let mover = self.piece(id).ok_or(MoveError::UnknownPiece { id })?;
        let dest_idx = dest.index().ok_or(MoveError::OffBoard { square: dest })?;

        let captured = match self.mailbox[dest_idx] {
            Some(target) if target != id => self
                .remove_piece(target)
                .map(|piece| Captured { id: target, piece }),
            _ => None,
        };

        if let Some(from_idx) = mover.square.index() {
            self.mailbox[from_idx] = None;
        }
        self.mailbox[dest_idx] = Some(id);
        if let Some(slot) = self.slots.get_mut(id.0).and_then(Option::as_mut) {
            slot.square = dest;
        }
        self.side_to_move = self.side_to_move.opponent();

        #[cfg(feature = "logging")]
        match &captured {
            Some(c) => log::debug!(
                "{} {} {}x{} captures {}",
                mover.side,
                mover.kind,
                mover.square,
                dest,
                c.piece
            ),
            None => log::debug!("{} {} {}-{}", mover.side, mover.kind, mover.square, dest),
        }

        Ok(captured)
    }
}

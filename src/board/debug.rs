use std::fmt::Write;

use super::{Board, PieceId};

impl Board {
    /// Check that the arena and the square index agree.
    ///
    /// Returns a description of the first inconsistency found.
    pub fn check_invariants(&self) -> Result<(), String> {
        for (id, piece) in self.pieces() {
            let Some(idx) = piece.square.index() else {
                return Err(format!("{id} stands off the board on {}", piece.square));
            };
            if self.mailbox[idx] != Some(id) {
                return Err(format!(
                    "{id} claims {} but the square holds {:?}",
                    piece.square, self.mailbox[idx]
                ));
            }
        }
        for (idx, entry) in self.mailbox.iter().enumerate() {
            if let Some(id) = entry {
                match self.piece(*id) {
                    Some(piece) if piece.square.index() == Some(idx) => {}
                    _ => return Err(format!("square {idx} points at stale slot {id}")),
                }
            }
        }
        Ok(())
    }

    /// Debug helper listing every slot, captured ones included
    pub fn debug_slots(&self) -> String {
        let mut out = format!("Side to move: {}\n", self.side_to_move);
        for (idx, slot) in self.slots.iter().enumerate() {
            let id = PieceId(idx);
            let _ = match slot {
                Some(piece) => writeln!(out, "{id}: {piece}"),
                None => writeln!(out, "{id}: captured"),
            };
        }
        out
    }
}

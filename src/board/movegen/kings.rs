use super::super::jump_tables::{KING_DELTAS, KING_TARGETS};
use super::super::{Board, MoveSet, Side, Square};

impl Board {
    /// One step in any direction. No castling.
    pub(crate) fn generate_king_moves(&self, from: Square, side: Side) -> MoveSet {
        let mut moves = MoveSet::new();

        match from.index() {
            Some(idx) => {
                for &to in KING_TARGETS[idx].as_slice() {
                    if self.is_landing_candidate(to, side) {
                        moves.push(to);
                    }
                }
            }
            None => {
                for (df, dr) in KING_DELTAS {
                    let to = from.offset(df, dr);
                    if self.is_landing_candidate(to, side) {
                        moves.push(to);
                    }
                }
            }
        }
        moves
    }
}

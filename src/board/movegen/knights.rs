use super::super::jump_tables::{KNIGHT_DELTAS, KNIGHT_TARGETS};
use super::super::{Board, MoveSet, Side, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Side) -> MoveSet {
        let mut moves = MoveSet::new();

        match from.index() {
            Some(idx) => {
                for &to in KNIGHT_TARGETS[idx].as_slice() {
                    if self.is_landing_candidate(to, side) {
                        moves.push(to);
                    }
                }
            }
            None => {
                for (df, dr) in KNIGHT_DELTAS {
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

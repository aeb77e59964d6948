use super::super::{Board, MoveSet, Side, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, side: Side) -> MoveSet {
        let mut moves = MoveSet::new();
        let dir = side.pawn_direction();

        let forward = from.offset(0, dir);
        if self.is_on_board(forward) && self.is_square_empty(forward) {
            moves.push(forward);

            // Only reachable when the square in between was just found empty
            if from.rank() == side.pawn_home_rank() {
                let double_forward = from.offset(0, 2 * dir);
                if self.is_on_board(double_forward) && self.is_square_empty(double_forward) {
                    moves.push(double_forward);
                }
            }
        }

        for df in [-1, 1] {
            let target = from.offset(df, dir);
            if self.is_on_board(target) && self.is_opponent(target, side) {
                moves.push(target);
            }
        }

        moves
    }
}

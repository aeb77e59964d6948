use super::super::{Board, MoveSet, Side, Square};

/// Orthogonal rays as (file, rank) deltas.
pub(crate) const ROOK_RAYS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Diagonal rays as (file, rank) deltas.
pub(crate) const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal rays followed by diagonal rays.
pub(crate) const QUEEN_RAYS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Walk each ray until the edge or the first occupied square, which is
    /// included only when it holds an opponent.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        side: Side,
        rays: &[(i8, i8)],
    ) -> MoveSet {
        let mut moves = MoveSet::new();

        for &(df, dr) in rays {
            let mut to = from.offset(df, dr);
            while self.is_on_board(to) {
                if self.is_square_empty(to) {
                    moves.push(to);
                } else {
                    if self.is_opponent(to, side) {
                        moves.push(to);
                    }
                    break;
                }
                to = to.offset(df, dr);
            }
        }
        moves
    }
}

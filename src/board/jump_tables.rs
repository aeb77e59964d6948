//! Precomputed on-board targets for leaper pieces (knights, kings).
//!
//! Targets keep the order of the offset lists so generated move sets are
//! deterministic.

use once_cell::sync::Lazy;

use super::Square;

/// Knight offsets as (file, rank) deltas.
pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

/// King offsets as (file, rank) deltas: orthogonal first, then diagonal.
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Up to eight on-board jump targets from one origin square.
#[derive(Clone, Copy, Debug)]
pub(crate) struct JumpTargets {
    squares: [Square; 8],
    len: u8,
}

impl JumpTargets {
    fn from_origin(origin: Square, deltas: &[(i8, i8); 8]) -> Self {
        let mut targets = JumpTargets {
            squares: [origin; 8],
            len: 0,
        };
        for &(df, dr) in deltas {
            let sq = origin.offset(df, dr);
            if sq.is_on_board() {
                targets.squares[targets.len as usize] = sq;
                targets.len += 1;
            }
        }
        targets
    }

    pub(crate) fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

fn build_table(deltas: &[(i8, i8); 8]) -> [JumpTargets; 64] {
    std::array::from_fn(|idx| JumpTargets::from_origin(Square::from_index(idx), deltas))
}

pub(crate) static KNIGHT_TARGETS: Lazy<[JumpTargets; 64]> =
    Lazy::new(|| build_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[JumpTargets; 64]> =
    Lazy::new(|| build_table(&KING_DELTAS));

//! Move indicators shown while a piece is held, and board cell colours.

use crate::board::{Board, MoveSet, Side, Square};

use super::geometry::{Geometry, PixelPos};

/// RGBA colour.
pub type Rgba = (u8, u8, u8, u8);

/// Light cell colour.
pub const LIGHT_CELL: Rgba = (255, 255, 255, 255);

/// Dark cell colour.
pub const DARK_CELL: Rgba = (72, 60, 50, 255);

/// Fill for the cell under `sq`; a1 is dark.
#[must_use]
pub const fn cell_fill(sq: Square) -> Rgba {
    if (sq.file() ^ sq.rank()) & 1 == 0 {
        DARK_CELL
    } else {
        LIGHT_CELL
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    /// Destination is empty
    Quiet,
    /// Destination holds an opponent piece
    Capture,
}

impl IndicatorKind {
    /// Marker radius in pixels
    #[must_use]
    pub const fn radius(self) -> f32 {
        match self {
            IndicatorKind::Quiet => 10.0,
            IndicatorKind::Capture => 15.0,
        }
    }

    /// Polygon point count: a circle for quiet moves, a diamond for captures
    #[must_use]
    pub const fn point_count(self) -> usize {
        match self {
            IndicatorKind::Quiet => 30,
            IndicatorKind::Capture => 4,
        }
    }

    #[must_use]
    pub const fn fill(self) -> Rgba {
        match self {
            IndicatorKind::Quiet => (124, 252, 0, 150),
            IndicatorKind::Capture => (255, 100, 100, 150),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveIndicator {
    pub square: Square,
    pub kind: IndicatorKind,
}

impl MoveIndicator {
    /// Top-left corner of the marker's bounding box, centred in the cell.
    #[must_use]
    pub fn top_left(&self, geometry: &Geometry) -> PixelPos {
        let r = self.kind.radius();
        geometry.cell_centre(self.square).offset_by(-r, -r)
    }
}

/// Indicators for `moves` of a piece belonging to `side`.
///
/// Squares holding a king get no marker even when the move is legal.
#[must_use]
pub fn indicators_for(board: &Board, moves: &MoveSet, side: Side) -> Vec<MoveIndicator> {
    moves
        .iter()
        .filter(|sq| !board.has_king_at(**sq))
        .map(|&square| MoveIndicator {
            square,
            kind: if board.is_opponent(square, side) {
                IndicatorKind::Capture
            } else {
                IndicatorKind::Quiet
            },
        })
        .collect()
}

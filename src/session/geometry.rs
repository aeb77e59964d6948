//! Conversion between pixel space and board squares.
//!
//! Pixel (0, 0) is the top-left corner of a1's cell; x grows with the file
//! and y grows with the rank, so White starts at the top of the window.

use crate::board::Square;

/// A point in window pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        PixelPos { x, y }
    }

    #[inline]
    #[must_use]
    pub fn offset_by(self, dx: f32, dy: f32) -> Self {
        PixelPos::new(self.x + dx, self.y + dy)
    }
}

/// Board geometry for a fixed cell size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    cell_size: f32,
}

impl Geometry {
    #[must_use]
    pub const fn new(cell_size: f32) -> Self {
        Geometry { cell_size }
    }

    #[inline]
    #[must_use]
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Square whose cell contains `pos`, or `None` outside the board.
    #[must_use]
    pub fn square_at(&self, pos: PixelPos) -> Option<Square> {
        self.square_from_cells(
            (pos.x / self.cell_size).floor(),
            (pos.y / self.cell_size).floor(),
        )
    }

    /// Square whose centre is nearest to a sprite centred on `centre`.
    ///
    /// This is where a dropped piece lands; `None` if that square is off
    /// the board.
    #[must_use]
    pub fn snap(&self, centre: PixelPos) -> Option<Square> {
        let half = self.cell_size / 2.0;
        self.square_from_cells(
            ((centre.x - half) / self.cell_size).round(),
            ((centre.y - half) / self.cell_size).round(),
        )
    }

    /// Top-left corner of the square's cell.
    #[must_use]
    pub fn cell_origin(&self, sq: Square) -> PixelPos {
        PixelPos::new(
            f32::from(sq.file()) * self.cell_size,
            f32::from(sq.rank()) * self.cell_size,
        )
    }

    /// Centre of the square's cell, where its sprite is drawn.
    #[must_use]
    pub fn cell_centre(&self, sq: Square) -> PixelPos {
        let half = self.cell_size / 2.0;
        self.cell_origin(sq).offset_by(half, half)
    }

    fn square_from_cells(&self, file: f32, rank: f32) -> Option<Square> {
        if !(0.0..8.0).contains(&file) || !(0.0..8.0).contains(&rank) {
            return None;
        }
        Square::new(file as i8, rank as i8)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::new(super::config::DEFAULT_CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_at_floors() {
        let geo = Geometry::default();
        assert_eq!(geo.square_at(PixelPos::new(0.0, 0.0)), Some(Square(0, 0)));
        assert_eq!(geo.square_at(PixelPos::new(74.9, 74.9)), Some(Square(0, 0)));
        assert_eq!(geo.square_at(PixelPos::new(75.0, 150.0)), Some(Square(1, 2)));
        assert_eq!(geo.square_at(PixelPos::new(599.0, 599.0)), Some(Square(7, 7)));
    }

    #[test]
    fn test_square_at_outside_board() {
        let geo = Geometry::default();
        assert_eq!(geo.square_at(PixelPos::new(-0.5, 10.0)), None);
        assert_eq!(geo.square_at(PixelPos::new(600.0, 10.0)), None);
        assert_eq!(geo.square_at(PixelPos::new(10.0, 600.0)), None);
    }

    #[test]
    fn test_cell_centre_round_trips() {
        let geo = Geometry::new(50.0);
        for sq in Square::all() {
            let centre = geo.cell_centre(sq);
            assert_eq!(geo.square_at(centre), Some(sq));
            assert_eq!(geo.snap(centre), Some(sq));
        }
        assert_eq!(geo.cell_origin(Square(2, 3)), PixelPos::new(100.0, 150.0));
    }

    #[test]
    fn test_snap_to_nearest_cell() {
        let geo = Geometry::default();
        // e4 centre is (337.5, 262.5); a sprite slightly off still lands there
        assert_eq!(geo.snap(PixelPos::new(360.0, 240.0)), Some(Square(4, 3)));
        assert_eq!(geo.snap(PixelPos::new(380.0, 262.5)), Some(Square(5, 3)));
        assert_eq!(geo.snap(PixelPos::new(-40.0, 262.5)), None);
    }
}

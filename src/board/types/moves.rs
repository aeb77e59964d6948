//! Destination sets produced by move generation.

use std::ops::Index;

use super::square::Square;

/// Upper bound on destinations for a single piece (a centralised queen has 27).
pub const MAX_DESTINATIONS: usize = 32;

/// Fixed-size list of destination squares to avoid heap allocation.
///
/// Order is direction-then-distance as produced by the generator; callers
/// should only rely on membership.
#[derive(Clone, Copy, Debug)]
pub struct MoveSet {
    squares: [Square; MAX_DESTINATIONS],
    len: usize,
}

impl MoveSet {
    #[must_use]
    pub fn new() -> Self {
        MoveSet {
            squares: [Square(0, 0); MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, sq: Square) {
        debug_assert!(sq.is_on_board(), "destination {sq} is off the board");
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    /// Membership test used to validate a drop.
    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Destinations in board index order, for order-independent comparison.
    #[must_use]
    pub fn sorted(&self) -> Vec<Square> {
        let mut squares = self.as_slice().to_vec();
        squares.sort_unstable();
        squares
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        MoveSet::new()
    }
}

impl PartialEq for MoveSet {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveSet {}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over the squares in a `MoveSet`
pub struct MoveSetIntoIter {
    set: MoveSet,
    idx: usize,
}

impl Iterator for MoveSetIntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.set.len {
            let sq = self.set.squares[self.idx];
            self.idx += 1;
            Some(sq)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveSetIntoIter {}

impl IntoIterator for MoveSet {
    type Item = Square;
    type IntoIter = MoveSetIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveSetIntoIter { set: self, idx: 0 }
    }
}

impl Index<usize> for MoveSet {
    type Output = Square;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveSet index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.squares[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_contains() {
        let mut set = MoveSet::new();
        assert!(set.is_empty());
        set.push(Square(4, 2));
        set.push(Square(4, 3));
        assert_eq!(set.len(), 2);
        assert!(set.contains(Square(4, 3)));
        assert!(!set.contains(Square(4, 4)));
        assert_eq!(set[1], Square(4, 3));
    }

    #[test]
    fn test_sorted_ignores_generation_order() {
        let mut a = MoveSet::new();
        a.push(Square(1, 1));
        a.push(Square(0, 0));
        let mut b = MoveSet::new();
        b.push(Square(0, 0));
        b.push(Square(1, 1));
        assert_ne!(a, b);
        assert_eq!(a.sorted(), b.sorted());
    }

    #[test]
    fn test_owning_iterator() {
        let mut set = MoveSet::new();
        set.push(Square(2, 2));
        set.push(Square(3, 3));
        let collected: Vec<Square> = set.into_iter().collect();
        assert_eq!(collected, vec![Square(2, 2), Square(3, 3)]);
    }
}

//! Piece kind, side and piece types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in declaration order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a character (p, r, n, b, q, k), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Character with case based on side (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_placement_char(self, side: Side) -> char {
        let c = self.to_char();
        if side == Side::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Name used for sprite file names (`W_Pawn.png`, `B_Queen.png`, ...)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two players.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides, White first
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    /// Returns the opposite side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Pawn forward direction in ranks (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Pawn home rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_home_rank(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Back rank (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Sprite file prefix (`W` or `B`)
    #[inline]
    #[must_use]
    pub const fn sprite_prefix(self) -> char {
        match self {
            Side::White => 'W',
            Side::Black => 'B',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board.
///
/// Two pieces may compare equal by value; identity is the slot they occupy
/// in the board (see [`PieceId`](crate::board::PieceId)).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub square: Square,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Piece { kind, side, square }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.side, self.kind, self.square)
    }
}

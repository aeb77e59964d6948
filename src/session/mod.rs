//! Headless interaction session.
//!
//! Models the pick-up / drag / drop cycle of the two-player board without
//! any windowing. A renderer feeds it pointer positions (or squares) and
//! draws what it reports: piece positions, the held sprite and move
//! indicators. At most one piece is held at a time, and only pieces of the
//! side to move can be picked up; this is the only place turn order is
//! enforced.
//!
//! # Example
//! ```
//! use chess_sim::board::Square;
//! use chess_sim::session::{DropOutcome, Session};
//!
//! let mut session = Session::default();
//! session.pick_up(Square(4, 1));
//! match session.drop_on(Square(4, 3)) {
//!     DropOutcome::Moved { captured, .. } => assert!(captured.is_none()),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod config;
mod geometry;
mod indicators;

use std::fmt;

pub use config::{
    sprite_file, DisplayConfig, PieceStyle, DEFAULT_CELL_SIZE, DEFAULT_SPRITE_SIZE, SKINS_ROOT,
};
pub use geometry::{Geometry, PixelPos};
pub use indicators::{
    cell_fill, indicators_for, IndicatorKind, MoveIndicator, Rgba, DARK_CELL, LIGHT_CELL,
};

use crate::board::{Board, Captured, MoveSet, PieceId, Side, Square};

/// Why a pick-up did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionRejected {
    /// Pointer was outside the board
    OffBoard,
    /// No piece on the square
    EmptySquare { square: Square },
    /// The piece belongs to the side not on move
    NotYourTurn { square: Square, side: Side },
    /// A piece is already held
    AlreadyHolding { id: PieceId },
}

impl fmt::Display for SelectionRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionRejected::OffBoard => write!(f, "Pointer is off the board"),
            SelectionRejected::EmptySquare { square } => write!(f, "No piece on {square}"),
            SelectionRejected::NotYourTurn { square, side } => {
                write!(f, "Piece on {square} belongs to {side}, who is not on move")
            }
            SelectionRejected::AlreadyHolding { id } => {
                write!(f, "Already holding piece {id}")
            }
        }
    }
}

/// Result of a pick-up attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Started { id: PieceId, moves: MoveSet },
    Rejected(SelectionRejected),
}

/// Result of releasing the held piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The move was committed and the turn passed
    Moved {
        id: PieceId,
        from: Square,
        to: Square,
        captured: Option<Captured>,
    },
    /// The piece snapped back to `from`; nothing changed
    Cancelled { id: PieceId, from: Square },
    /// No piece was held
    NothingHeld,
}

#[derive(Clone, Debug)]
struct Held {
    id: PieceId,
    from: Square,
    moves: MoveSet,
    /// Sprite centre minus pointer at pick-up time
    grab_offset: PixelPos,
    /// Current sprite centre
    sprite_centre: PixelPos,
}

/// Board plus pointer state for one game.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    config: DisplayConfig,
    held: Option<Held>,
}

impl Session {
    /// New game from the starting position.
    #[must_use]
    pub fn new(config: DisplayConfig) -> Self {
        Session::with_board(Board::new(), config)
    }

    #[must_use]
    pub fn with_board(board: Board, config: DisplayConfig) -> Self {
        Session {
            board,
            config,
            held: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.config.cell_size)
    }

    /// Switch artwork. Board state and any held piece are unaffected.
    pub fn set_style(&mut self, style: PieceStyle) {
        #[cfg(feature = "logging")]
        log::debug!("piece style {} -> {}", self.config.style, style);
        self.config.style = style;
    }

    /// Start a new game, dropping any held piece.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.held = None;
    }

    pub fn held_piece(&self) -> Option<PieceId> {
        self.held.as_ref().map(|h| h.id)
    }

    pub fn held_moves(&self) -> Option<&MoveSet> {
        self.held.as_ref().map(|h| &h.moves)
    }

    /// Pick up the piece on `square`.
    pub fn pick_up(&mut self, square: Square) -> Selection {
        let centre = self.geometry().cell_centre(square);
        self.begin_selection(square, centre, PixelPos::default())
    }

    /// Pick up whatever piece lies under the pointer.
    pub fn pick_up_at(&mut self, pointer: PixelPos) -> Selection {
        let geometry = self.geometry();
        let Some(square) = geometry.square_at(pointer) else {
            return self.reject(SelectionRejected::OffBoard);
        };
        let centre = geometry.cell_centre(square);
        let grab_offset = PixelPos::new(centre.x - pointer.x, centre.y - pointer.y);
        self.begin_selection(square, pointer, grab_offset)
    }

    fn begin_selection(
        &mut self,
        square: Square,
        pointer: PixelPos,
        grab_offset: PixelPos,
    ) -> Selection {
        if let Some(held) = &self.held {
            return self.reject(SelectionRejected::AlreadyHolding { id: held.id });
        }
        if !self.board.is_on_board(square) {
            return self.reject(SelectionRejected::OffBoard);
        }
        let Some(id) = self.board.piece_id_at(square) else {
            return self.reject(SelectionRejected::EmptySquare { square });
        };
        let Some(piece) = self.board.piece(id) else {
            return self.reject(SelectionRejected::EmptySquare { square });
        };
        if piece.side != self.board.side_to_move() {
            return self.reject(SelectionRejected::NotYourTurn {
                square,
                side: piece.side,
            });
        }

        let moves = self.board.moves_of(&piece);
        #[cfg(feature = "logging")]
        log::trace!("picked up {piece}: {} destinations", moves.len());

        self.held = Some(Held {
            id,
            from: square,
            moves,
            grab_offset,
            sprite_centre: pointer.offset_by(grab_offset.x, grab_offset.y),
        });
        Selection::Started { id, moves }
    }

    fn reject(&self, reason: SelectionRejected) -> Selection {
        #[cfg(feature = "logging")]
        log::debug!("selection rejected: {reason}");
        Selection::Rejected(reason)
    }

    /// Move the held sprite with the pointer. Returns its new centre.
    pub fn drag_to(&mut self, pointer: PixelPos) -> Option<PixelPos> {
        let held = self.held.as_mut()?;
        held.sprite_centre = pointer.offset_by(held.grab_offset.x, held.grab_offset.y);
        Some(held.sprite_centre)
    }

    /// Release the held piece at the pointer; it lands on the nearest cell.
    pub fn drop_at(&mut self, pointer: PixelPos) -> DropOutcome {
        let Some(centre) = self.drag_to(pointer) else {
            return DropOutcome::NothingHeld;
        };
        match self.geometry().snap(centre) {
            Some(square) => self.drop_on(square),
            None => self.cancel(),
        }
    }

    /// Release the held piece on `square`.
    ///
    /// Commits if `square` is one of the piece's destinations, otherwise the
    /// piece snaps back and nothing changes.
    pub fn drop_on(&mut self, square: Square) -> DropOutcome {
        let Some(held) = self.held.take() else {
            return DropOutcome::NothingHeld;
        };

        // Board cannot change while a piece is held, so the pick-up moves still apply
        if !held.moves.contains(square) {
            #[cfg(feature = "logging")]
            log::debug!(
                "drop on {square} is not a destination; returning to {}",
                held.from
            );
            return DropOutcome::Cancelled {
                id: held.id,
                from: held.from,
            };
        }

        match self.board.commit_move(held.id, square) {
            Ok(captured) => DropOutcome::Moved {
                id: held.id,
                from: held.from,
                to: square,
                captured,
            },
            Err(_err) => {
                #[cfg(feature = "logging")]
                log::debug!("commit failed: {_err}");
                DropOutcome::Cancelled {
                    id: held.id,
                    from: held.from,
                }
            }
        }
    }

    /// Put the held piece back without moving.
    pub fn cancel(&mut self) -> DropOutcome {
        match self.held.take() {
            Some(held) => DropOutcome::Cancelled {
                id: held.id,
                from: held.from,
            },
            None => DropOutcome::NothingHeld,
        }
    }

    /// Pick up on `from` and drop on `to` in one step.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<DropOutcome, SelectionRejected> {
        match self.pick_up(from) {
            Selection::Started { .. } => Ok(self.drop_on(to)),
            Selection::Rejected(reason) => Err(reason),
        }
    }

    /// Markers for the held piece's destinations; empty when nothing is held.
    pub fn indicators(&self) -> Vec<MoveIndicator> {
        match &self.held {
            Some(held) => {
                let side = self
                    .board
                    .piece(held.id)
                    .map_or(self.board.side_to_move(), |p| p.side);
                indicators_for(&self.board, &held.moves, side)
            }
            None => Vec::new(),
        }
    }

    /// Where to draw a piece's sprite centre: following the pointer while
    /// held, otherwise centred on its square.
    pub fn sprite_centre(&self, id: PieceId) -> Option<PixelPos> {
        if let Some(held) = self.held.as_ref().filter(|h| h.id == id) {
            return Some(held.sprite_centre);
        }
        let piece = self.board.piece(id)?;
        Some(self.geometry().cell_centre(piece.square))
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(DisplayConfig::default())
    }
}

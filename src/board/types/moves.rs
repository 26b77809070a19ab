//! Move type.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::grid::Board;

/// A single ply: start and end squares plus the pieces involved.
///
/// The mover and the captured piece are snapshotted when the move is built,
/// because the board changes once the move is made. Equality and hashing
/// only look at the coordinates (see [`Move::id`]).
#[derive(Clone, Copy, Debug)]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: (Color, Piece),
    piece_captured: Option<(Color, Piece)>,
}

impl Move {
    /// Build a move from `from` to `to` using the pieces currently on `board`.
    ///
    /// Returns `None` when `from` is empty. No legality check is done here.
    #[must_use]
    pub fn new(from: Square, to: Square, board: &Board) -> Option<Self> {
        let piece_moved = board.piece_at(from)?;
        Some(Move::with_pieces(from, to, piece_moved, board.piece_at(to)))
    }

    #[inline]
    pub(crate) const fn with_pieces(
        from: Square,
        to: Square,
        piece_moved: (Color, Piece),
        piece_captured: Option<(Color, Piece)>,
    ) -> Self {
        Move {
            from,
            to,
            piece_moved,
            piece_captured,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece that moves
    #[inline]
    #[must_use]
    pub const fn piece_moved(self) -> (Color, Piece) {
        self.piece_moved
    }

    /// The piece standing on the destination square, if any
    #[inline]
    #[must_use]
    pub const fn piece_captured(self) -> Option<(Color, Piece)> {
        self.piece_captured
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.piece_captured.is_some()
    }

    /// Coordinate identity: `sr*1000 + sc*100 + er*10 + ec`.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u16 {
        (self.from.row() * 1000 + self.from.col() * 100 + self.to.row() * 10 + self.to.col())
            as u16
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

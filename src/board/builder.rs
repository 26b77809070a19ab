//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let state = BoardBuilder::new()
//!     .piece(Square::new(7, 4).unwrap(), Color::White, Piece::King)
//!     .piece(Square::new(0, 4).unwrap(), Color::Black, Piece::King)
//!     .piece(Square::new(6, 0).unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert!(state.white_to_move());
//! ```

use super::error::FenError;
use super::{Board, Color, GameState, Piece, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::starting(),
            side_to_move: Color::White,
        }
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the position.
    ///
    /// Fails with [`FenError::KingCount`] unless each color has exactly one
    /// king, and with [`FenError::OpponentInCheck`] if the side not to move
    /// is in check.
    pub fn build(self) -> Result<GameState, FenError> {
        GameState::with_board(self.board, self.side_to_move == Color::White)
    }
}

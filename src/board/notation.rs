//! Coordinate move notation ("e2e4") and the checked move boundary.
//!
//! `make_move` trusts its caller. Input coming from a user interface goes
//! through these helpers instead, which only ever apply a move taken from the
//! current legal set.

use super::error::MoveParseError;
use super::{GameState, Move, Square};

impl GameState {
    /// The legal move from `from` to `to`, if there is one.
    ///
    /// Recomputes the terminal flags as a side effect of generating the
    /// legal moves.
    pub fn find_legal_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to)
    }

    /// Parse a move in coordinate notation (e.g. "e2e4") and match it
    /// against the legal moves of the current position.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::board::GameState;
    ///
    /// let mut state = GameState::new();
    /// let mv = state.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let invalid = |_| MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[..2].parse().map_err(invalid)?;
        let to: Square = notation[2..].parse().map_err(invalid)?;

        self.find_legal_move(from, to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Play the move from `from` to `to` if it is legal.
    pub fn play_move(&mut self, from: Square, to: Square) -> Result<Move, MoveParseError> {
        let mv = self
            .find_legal_move(from, to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: format!("{from}{to}"),
            })?;
        self.make_move(mv);
        Ok(mv)
    }

    /// Parse and play a move in coordinate notation.
    pub fn play_uci(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_move(mv);
        Ok(mv)
    }
}

use super::{GameState, Move, Piece};

impl GameState {
    /// Apply `mv` to the board.
    ///
    /// Clears the start square, puts the mover on the end square (discarding
    /// whatever stood there), records the move, flips the turn and updates the
    /// king cache if a king moved. The move must come from
    /// [`GameState::legal_moves`] for the current position; nothing is checked
    /// here beyond debug assertions. Terminal flags are left untouched.
    pub fn make_move(&mut self, mv: Move) {
        let (color, piece) = mv.piece_moved();
        debug_assert_eq!(
            self.board.piece_at(mv.from()),
            Some((color, piece)),
            "move {mv} does not match the board"
        );
        debug_assert_eq!(color, self.side_to_move(), "move {mv} is out of turn");

        self.board.set(mv.from(), None);
        self.board.set(mv.to(), Some((color, piece)));
        self.move_log.push(mv);
        self.white_to_move = !self.white_to_move;

        if piece == Piece::King {
            self.king_squares[color.index()] = mv.to();
        }
    }

    /// Take back the most recent move.
    ///
    /// Returns the move that was undone, or `None` (leaving the state
    /// untouched) when the history is empty. Both terminal flags are cleared.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        let (color, piece) = mv.piece_moved();

        self.board.set(mv.from(), Some((color, piece)));
        self.board.set(mv.to(), mv.piece_captured());
        self.white_to_move = !self.white_to_move;

        if piece == Piece::King {
            self.king_squares[color.index()] = mv.from();
        }

        self.checkmate = false;
        self.stalemate = false;
        Some(mv)
    }
}

use super::{Board, Color, GameState};

/// Score of a mated position, from White's point of view when Black is mated.
pub const MATE_SCORE: i32 = 100_000;

impl Board {
    /// Material balance in pawns: White's pieces count positive, Black's negative.
    #[must_use]
    pub fn material(&self) -> i32 {
        self.pieces()
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum()
    }
}

impl GameState {
    /// Static evaluation from White's point of view.
    ///
    /// Relies on the terminal flags, so it is only meaningful after
    /// `legal_moves` has been called for the current position. A mated side
    /// to move scores `MATE_SCORE` against it, stalemate is 0, and anything
    /// else is the material balance.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.checkmate {
            return match self.side_to_move() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        if self.stalemate {
            return 0;
        }
        self.board.material()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        let mut state = GameState::new();
        state.legal_moves();
        assert_eq!(state.evaluate(), 0);
    }

    #[test]
    fn test_material_counts_sides() {
        // White has an extra rook and Black an extra knight.
        let state = GameState::from_fen("4k3/8/8/3n4/8/8/8/R3K3 w - - 0 1");
        assert_eq!(state.board().material(), 5 - 3);
        assert_eq!(state.evaluate(), 2);
    }

    #[test]
    fn test_mate_scores_against_side_to_move() {
        // Black is mated by the rook on the back rank.
        let mut state = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(state.legal_moves().is_empty());
        assert!(state.is_checkmate());
        assert_eq!(state.evaluate(), MATE_SCORE);
    }

    #[test]
    fn test_stalemate_scores_zero() {
        // Black king on a8 has no moves and is not in check; White is a queen up.
        let mut state = GameState::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1");
        assert!(state.legal_moves().is_empty());
        assert!(state.is_stalemate());
        assert_eq!(state.evaluate(), 0);
    }
}

use super::error::FenError;
use super::{Board, Color, Move, Piece, Square};

/// Full game state: the grid, whose turn it is, the move history and the
/// cached king locations.
///
/// `checkmate` and `stalemate` describe the side to move and are only
/// recomputed by [`GameState::legal_moves`]; `make_move` leaves them stale and
/// `undo_move` clears them.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) move_log: Vec<Move>,
    pub(crate) king_squares: [Square; 2], // [white, black]
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting(),
            white_to_move: true,
            move_log: Vec::new(),
            king_squares: [Square::at(7, 4), Square::at(0, 4)],
            checkmate: false,
            stalemate: false,
        }
    }

    /// Wrap an arbitrary grid.
    ///
    /// Each color needs exactly one king, and the side not to move must not
    /// be in check: otherwise the mover could capture a king.
    pub(crate) fn with_board(board: Board, white_to_move: bool) -> Result<Self, FenError> {
        let mut king_squares = [None, None];
        let mut king_counts = [0usize; 2];
        for (sq, color, piece) in board.pieces() {
            if piece == Piece::King {
                king_squares[color.index()] = Some(sq);
                king_counts[color.index()] += 1;
            }
        }

        let mut found = [Square::at(0, 0); 2];
        for color in Color::BOTH {
            match (king_counts[color.index()], king_squares[color.index()]) {
                (1, Some(sq)) => found[color.index()] = sq,
                (count, _) => return Err(FenError::KingCount { color, found: count }),
            }
        }

        let state = GameState {
            board,
            white_to_move,
            move_log: Vec::new(),
            king_squares: found,
            checkmate: false,
            stalemate: false,
        };

        let waiting = state.side_to_move().opponent();
        if state.king_in_check(waiting) {
            return Err(FenError::OpponentInCheck { color: waiting });
        }
        Ok(state)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Moves made and not yet undone, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Cached location of `color`'s king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// True if the last `legal_moves` call found the side to move mated.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// True if the last `legal_moves` call found the side to move stalemated.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert!(state.white_to_move());
        assert_eq!(state.side_to_move(), Color::White);
        assert!(state.move_log().is_empty());
        assert_eq!(state.king_square(Color::White), Square::at(7, 4));
        assert_eq!(state.king_square(Color::Black), Square::at(0, 4));
        assert!(!state.is_checkmate());
        assert!(!state.is_stalemate());
    }

    #[test]
    fn test_with_board_requires_one_king_each() {
        assert_eq!(
            GameState::with_board(Board::empty(), true).err(),
            Some(FenError::KingCount {
                color: Color::White,
                found: 0
            })
        );

        let mut board = Board::empty();
        board.set(Square::at(7, 4), Some((Color::White, Piece::King)));
        board.set(Square::at(0, 4), Some((Color::Black, Piece::King)));
        board.set(Square::at(0, 0), Some((Color::Black, Piece::King)));
        assert_eq!(
            GameState::with_board(board, true).err(),
            Some(FenError::KingCount {
                color: Color::Black,
                found: 2
            })
        );
    }

    #[test]
    fn test_with_board_rejects_capturable_king() {
        // The rook on h8 attacks the black king while White is to move.
        let mut board = Board::empty();
        board.set(Square::at(7, 4), Some((Color::White, Piece::King)));
        board.set(Square::at(0, 4), Some((Color::Black, Piece::King)));
        board.set(Square::at(0, 7), Some((Color::White, Piece::Rook)));
        assert_eq!(
            GameState::with_board(board.clone(), true).err(),
            Some(FenError::OpponentInCheck {
                color: Color::Black
            })
        );

        // The same grid is fine with Black to move: Black is simply in check.
        let state = GameState::with_board(board, false).unwrap();
        assert!(state.is_in_check());
    }
}

use super::error::FenError;
use super::{Board, Color, GameState, Piece, Square};

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Only piece placement and side to move are used. Castling, en passant
    /// and the move counters are accepted when present and ignored, since the
    /// rules engine does not model them. The position must contain exactly
    /// one king of each color, and the side not to move must not be in check.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }

        // FEN lists rank 8 first, which is row 0.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(row, col).ok_or(FenError::FileCount {
                    rank: 8 - row,
                    files: col + 1,
                })?;
                board.set(sq, Some((color, piece)));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::FileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        let white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        GameState::with_board(board, white_to_move)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    ///
    /// Castling and en passant are always written as `-`; the fullmove number
    /// is derived from the length of the move log.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row_tokens in self.board.rows() {
            let mut row = String::new();
            let mut empty = 0;
            for token in row_tokens {
                if let Some((color, piece)) = token {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(*color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let fullmove = self.move_log.len() / 2 + 1;
        format!("{} {} - - 0 {}", rows.join("/"), active, fullmove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_fen_matches_new() {
        let parsed = GameState::from_fen(START_FEN);
        let fresh = GameState::new();
        assert_eq!(parsed.board(), fresh.board());
        assert_eq!(parsed.white_to_move(), fresh.white_to_move());
        assert_eq!(parsed.king_square(Color::White), Square::at(7, 4));
        assert_eq!(parsed.king_square(Color::Black), Square::at(0, 4));
    }

    #[test]
    fn test_to_fen_start() {
        assert_eq!(
            GameState::new().to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
        );
    }

    #[test]
    fn test_fen_roundtrip_preserves_placement() {
        let fen = "4k3/8/8/3q4/8/8/PP6/4K2R b - - 0 1";
        let state = GameState::from_fen(fen);
        let again = GameState::from_fen(&state.to_fen());
        assert_eq!(state.board(), again.board());
        assert!(!again.white_to_move());
    }

    #[test]
    fn test_side_to_move_only_is_enough() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b");
        assert_eq!(state.side_to_move(), Color::Black);
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            GameState::try_from_fen("8/8/8/8/8/8/8/8").err(),
            Some(FenError::TooFewParts { found: 1 })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/4K3 w").err(),
            Some(FenError::RankCount { found: 7 })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K2X w").err(),
            Some(FenError::InvalidPiece { char: 'X' })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 x").err(),
            Some(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K4 w").err(),
            Some(FenError::FileCount { rank: 1, files: 9 })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K2 w").err(),
            Some(FenError::FileCount { rank: 1, files: 7 })
        );
        assert_eq!(
            GameState::try_from_fen("8/8/8/8/8/8/8/4K3 w").err(),
            Some(FenError::KingCount {
                color: Color::Black,
                found: 0
            })
        );
        assert_eq!(
            GameState::try_from_fen("4k2R/8/8/8/8/8/8/4K3 w - - 0 1").err(),
            Some(FenError::OpponentInCheck {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_king_capture_never_reaches_the_board() {
        // With Black to move the rook check is an ordinary check to answer.
        let mut state = GameState::from_fen("4k2R/8/8/8/8/8/8/4K3 b - - 0 1");
        assert!(state.is_in_check());
        assert!(state
            .legal_moves()
            .iter()
            .all(|m| !matches!(m.piece_captured(), Some((_, Piece::King)))));

        state.play_uci("e8d7").unwrap();
        let kings = state
            .board()
            .pieces()
            .filter(|&(_, _, piece)| piece == Piece::King)
            .count();
        assert_eq!(kings, 2);
        assert!(!state.is_stalemate());
    }
}

//! Move generation.
//!
//! Generation happens in two passes. The per-piece generators produce
//! pseudo-legal moves from the grid alone (board edges and occupancy only).
//! [`GameState::legal_moves`] then plays each candidate, rejects it if the
//! mover's king is left attacked, and takes it back.
//!
//! Attack detection deliberately reuses the attacker's pseudo-legal moves:
//! a piece pinned to its own king still gives check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, GameState, Move, Piece, Square};
use sliders::{DIAGONAL, ORTHOGONAL};

impl Board {
    /// All pseudo-legal moves for `color`, scanning the grid row by row.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for (from, c, piece) in self.pieces() {
            if c == color {
                self.generate_piece_moves(from, color, piece, &mut moves);
            }
        }
        moves
    }

    fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut Vec<Move>) {
        let mover = (color, piece);
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_sliding_moves(from, mover, &DIAGONAL, moves),
            Piece::Rook => self.generate_sliding_moves(from, mover, &ORTHOGONAL, moves),
            Piece::Queen => {
                self.generate_sliding_moves(from, mover, &ORTHOGONAL, moves);
                self.generate_sliding_moves(from, mover, &DIAGONAL, moves);
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }
}

impl GameState {
    /// Pseudo-legal moves for `color`, regardless of whose turn it is.
    #[must_use]
    pub fn pseudo_legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.board.pseudo_legal_moves(color)
    }

    /// True if any pseudo-legal move of `by` ends on `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.board
            .pseudo_legal_moves(by)
            .iter()
            .any(|m| m.to() == sq)
    }

    /// True if `color`'s king is attacked, independent of the turn flag.
    #[must_use]
    pub fn king_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// True if the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.king_in_check(self.side_to_move())
    }

    /// Fully legal moves for the side to move.
    ///
    /// Also recomputes the terminal flags: with no legal moves the position
    /// is checkmate if the side to move is in check and stalemate otherwise;
    /// with any legal move both flags are cleared.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move();
        let mut moves = self.pseudo_legal_moves_for(mover);

        moves.retain(|&mv| {
            self.make_move(mv);
            let exposes_king = self.king_in_check(mover);
            self.undo_move();
            !exposes_king
        });

        if moves.is_empty() {
            let in_check = self.is_in_check();
            self.checkmate = in_check;
            self.stalemate = !in_check;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        moves
    }
}

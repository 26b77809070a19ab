use super::super::attack_tables::{squares_in, KNIGHT_TARGETS};
use super::super::{Board, Color, Move, Piece, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, (color, Piece::Knight), KNIGHT_TARGETS[from.as_index()], moves);
    }

    /// Jump to every square in `targets` not held by the mover's own side.
    pub(super) fn generate_step_moves(
        &self,
        from: Square,
        mover: (Color, Piece),
        targets: u64,
        moves: &mut Vec<Move>,
    ) {
        for to in squares_in(targets) {
            let captured = self.piece_at(to);
            match captured {
                Some((c, _)) if c == mover.0 => {}
                _ => moves.push(Move::with_pieces(from, to, mover, captured)),
            }
        }
    }
}

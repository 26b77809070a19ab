use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, Move, Piece, Square};

impl Board {
    /// One step in any direction. Moving into check is filtered later by the
    /// legal-move pass, like every other self-check.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, (color, Piece::King), KING_TARGETS[from.as_index()], moves);
    }
}

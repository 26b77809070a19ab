use super::super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Pushes, double pushes from the start row, and diagonal captures.
    /// No en passant and no promotion: a pawn on the far row is stuck.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let mover = (color, Piece::Pawn);
        let dir = color.pawn_direction();

        let Some(forward) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward) {
            moves.push(Move::with_pieces(from, forward, mover, None));
            if from.row() == color.pawn_start_row() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.is_empty(double) {
                        moves.push(Move::with_pieces(from, double, mover, None));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            if let Some((target_color, target_piece)) = self.piece_at(target) {
                if target_color != color {
                    moves.push(Move::with_pieces(
                        from,
                        target,
                        mover,
                        Some((target_color, target_piece)),
                    ));
                }
            }
        }
    }
}

use super::super::{Board, Color, Move, Piece, Square};

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Cast rays from `from` in each direction, stopping at the edge, before
    /// an own piece, or on the first enemy piece (which is captured).
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        mover: (Color, Piece),
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dr, dc) {
                match self.piece_at(to) {
                    None => moves.push(Move::with_pieces(from, to, mover, None)),
                    Some((c, p)) => {
                        if c != mover.0 {
                            moves.push(Move::with_pieces(from, to, mover, Some((c, p))));
                        }
                        break;
                    }
                }
                cursor = to;
            }
        }
    }
}

//! The 8x8 mailbox grid.

use super::{Color, Piece, Square};

/// Contents of one square: a colored piece, or `None` when empty.
pub type PieceToken = Option<(Color, Piece)>;

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Fixed 8x8 grid of piece tokens, indexed by [`Square`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[PieceToken; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial arrangement.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (col, piece) in BACK_ROW.iter().enumerate() {
                board.set(Square::at(back, col), Some((color, *piece)));
                board.set(Square::at(pawns, col), Some((color, Piece::Pawn)));
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> PieceToken {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Color of the piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, token: PieceToken) {
        self.squares[sq.row()][sq.col()] = token;
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Rows of the grid, row 0 (rank 8) first.
    #[must_use]
    pub fn rows(&self) -> &[[PieceToken; 8]; 8] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

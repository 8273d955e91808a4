//! The 8x8 piece grid.

use std::fmt;

use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Back-rank layout from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[row][col]` with row 0 at the top (rank 8).
///
/// Every stored piece carries its own coordinate, and that coordinate always
/// equals the cell it sits in: the only way to place a piece is [`Board::put`],
/// which re-stamps the position.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for coord in Coord::all() {
            let piece = match coord.row() {
                0 => Piece::new(BACK_RANK[coord.col() as usize], Color::Black),
                1 => Piece::BLACK_PAWN,
                6 => Piece::WHITE_PAWN,
                7 => Piece::new(BACK_RANK[coord.col() as usize], Color::White),
                _ => continue,
            };
            board.put(coord, piece);
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.row() as usize][coord.col() as usize]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, coord: Coord) -> Option<Color> {
        self.piece_at(coord).map(Piece::color)
    }

    /// Return `true` if no piece stands on the given square.
    #[inline]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    /// Place `piece` on `coord`, stamping its position. Returns whatever stood there before.
    pub fn put(&mut self, coord: Coord, piece: Piece) -> Option<Piece> {
        self.cells[coord.row() as usize][coord.col() as usize].replace(piece.at(coord))
    }

    /// Remove and return the piece on `coord`.
    pub fn take(&mut self, coord: Coord) -> Option<Piece> {
        self.cells[coord.row() as usize][coord.col() as usize].take()
    }

    /// Return a new board with the piece on `mv.from()` moved to `mv.to()`,
    /// replacing anything on the destination.
    ///
    /// The receiver is left untouched. No rules are checked; a move from an
    /// empty square yields an identical board.
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = *self;
        if let Some(piece) = next.take(mv.from()) {
            next.put(mv.to(), piece);
        }
        next
    }

    /// Iterate over all pieces, row by row from the top.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    /// Iterate over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.pieces().count()
    }

    /// Rows of the grid, top rank first.
    #[inline]
    pub(crate) fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.0.rows().iter().enumerate() {
            write!(f, "{}  ", 8 - row_idx)?;
            for (col_idx, cell) in row.iter().enumerate() {
                let c = cell.map_or('.', Piece::fen_char);
                if col_idx < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::piece::Piece;

    fn sq(name: &str) -> Coord {
        name.parse().unwrap()
    }

    #[test]
    fn starting_position_piece_at() {
        let board = Board::starting_position();
        assert!(board.piece_at(sq("e1")).unwrap().same_type(Piece::WHITE_KING));
        assert!(board.piece_at(sq("d1")).unwrap().same_type(Piece::WHITE_QUEEN));
        assert!(board.piece_at(sq("a1")).unwrap().same_type(Piece::WHITE_ROOK));
        assert!(board.piece_at(sq("b8")).unwrap().same_type(Piece::BLACK_KNIGHT));
        assert!(board.piece_at(sq("e7")).unwrap().same_type(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.count(), 32);
    }

    #[test]
    fn positions_match_cells() {
        let board = Board::starting_position();
        for coord in Coord::all() {
            if let Some(piece) = board.piece_at(coord) {
                assert_eq!(piece.position(), Some(coord));
            }
        }
    }

    #[test]
    fn put_restamps_and_take_clears() {
        let mut board = Board::empty();
        let prev = board.put(sq("d4"), Piece::WHITE_QUEEN.at(sq("a1")));
        assert_eq!(prev, None);
        assert_eq!(board.piece_at(sq("d4")).unwrap().position(), Some(sq("d4")));

        let taken = board.take(sq("d4")).unwrap();
        assert!(taken.same_type(Piece::WHITE_QUEEN));
        assert!(board.is_empty_at(sq("d4")));
    }

    #[test]
    fn with_move_leaves_original() {
        let board = Board::starting_position();
        let next = board.with_move(Move::new(sq("e2"), sq("e4")));
        assert!(board.piece_at(sq("e2")).is_some());
        assert!(next.is_empty_at(sq("e2")));
        assert_eq!(next.piece_at(sq("e4")).unwrap().position(), Some(sq("e4")));
        assert_eq!(next.count(), 32);
    }

    #[test]
    fn with_move_captures() {
        let board = Board::starting_position();
        let next = board.with_move(Move::new(sq("d1"), sq("d7")));
        assert!(next.piece_at(sq("d7")).unwrap().same_type(Piece::WHITE_QUEEN));
        assert_eq!(next.count(), 31);
    }

    #[test]
    fn with_move_from_empty_square() {
        let board = Board::starting_position();
        assert_eq!(board.with_move(Move::new(sq("e4"), sq("e5"))), board);
    }

    #[test]
    fn pieces_of_color() {
        let board = Board::starting_position();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert!(board.pieces_of(Color::Black).all(|p| p.color() == Color::Black));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.starts_with("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.contains("a b c d e f g h"));
    }
}

//! Colored chess pieces.

use std::fmt;

use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

/// A colored piece, optionally stamped with the square it stands on.
///
/// Templates such as [`Piece::WHITE_KING`] carry no position; pieces read
/// from a [`Board`](crate::Board) always carry the coordinate of their cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Option<Coord>,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Create an unplaced piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            position: None,
        }
    }

    /// Create a piece standing on `position`.
    #[inline]
    pub const fn placed(kind: PieceKind, color: Color, position: Coord) -> Piece {
        Piece {
            kind,
            color,
            position: Some(position),
        }
    }

    /// Return a copy of this piece stamped with `position`.
    #[inline]
    pub const fn at(self, position: Coord) -> Piece {
        Piece::placed(self.kind, self.color, position)
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The square this piece was placed on, if any.
    #[inline]
    pub const fn position(self) -> Option<Coord> {
        self.position
    }

    /// Return `true` if both pieces have the same kind and color, ignoring position.
    #[inline]
    pub fn same_type(self, other: Piece) -> bool {
        self.kind == other.kind && self.color == other.color
    }

    /// Return the FEN letter for this piece.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.fen_char().to_ascii_uppercase();
        match self.position {
            Some(pos) => write!(f, "{color_prefix}{kind_char}@{pos}"),
            None => write!(f, "{color_prefix}{kind_char}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_has_no_position() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.color(), color);
                assert_eq!(piece.position(), None);
            }
        }
    }

    #[test]
    fn at_stamps_position() {
        let e1 = Coord::new(7, 4).unwrap();
        let king = Piece::WHITE_KING.at(e1);
        assert_eq!(king.position(), Some(e1));
        assert!(king.same_type(Piece::WHITE_KING));
        assert_ne!(king, Piece::WHITE_KING);
    }

    #[test]
    fn from_fen_char_case_sensitivity() {
        assert_eq!(Piece::from_fen_char('P'), Some(Piece::WHITE_PAWN));
        assert_eq!(Piece::from_fen_char('N'), Some(Piece::WHITE_KNIGHT));
        assert_eq!(Piece::from_fen_char('K'), Some(Piece::WHITE_KING));
        assert_eq!(Piece::from_fen_char('p'), Some(Piece::BLACK_PAWN));
        assert_eq!(Piece::from_fen_char('q'), Some(Piece::BLACK_QUEEN));
        assert_eq!(Piece::from_fen_char('r'), Some(Piece::BLACK_ROOK));

        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('1'), None);
        assert_eq!(Piece::from_fen_char(' '), None);
    }

    #[test]
    fn fen_char_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(Piece::from_fen_char(piece.fen_char()), Some(piece));
            }
        }
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Piece::WHITE_PAWN), "WP");
        assert_eq!(format!("{:?}", Piece::BLACK_KING), "BK");
        let e2 = Coord::new(6, 4).unwrap();
        assert_eq!(format!("{:?}", Piece::WHITE_PAWN.at(e2)), "WP@e2");
    }
}

//! Piece colors.

use std::fmt;
use std::ops::Not;

use crate::error::FenError;

/// A piece color, also used for whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row offset of a single pawn push. Row 0 is Black's back rank.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns start.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Parse the active-color field of a position record.
    pub fn from_fen_field(field: &str) -> Result<Color, FenError> {
        match field {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            other => Err(FenError::InvalidColor {
                found: other.to_string(),
            }),
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(!!Color::White, Color::White);
    }

    #[test]
    fn pawn_geometry() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.pawn_home_row(), 6);
        assert_eq!(Color::Black.pawn_home_row(), 1);
    }

    #[test]
    fn fen_field() {
        assert_eq!(Color::from_fen_field("w"), Ok(Color::White));
        assert_eq!(Color::from_fen_field("b"), Ok(Color::Black));
        assert!(Color::from_fen_field("W").is_err());
        assert!(Color::from_fen_field("").is_err());
    }

    #[test]
    fn display_and_name() {
        assert_eq!(format!("{}", Color::White), "w");
        assert_eq!(format!("{}", Color::Black), "b");
        assert_eq!(Color::Black.name(), "black");
    }
}

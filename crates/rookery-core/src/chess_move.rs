//! A single ply as a pair of coordinates.

use std::fmt;
use std::str::FromStr;

use crate::coord::{Coord, parse_square_name};
use crate::error::ChessError;

/// One ply: the square a piece leaves and the square it lands on.
///
/// Carries no piece or capture information; callers look those up on the
/// board they apply it to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Coord,
    to: Coord,
}

impl Move {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Move {
        Move { from, to }
    }

    #[inline]
    pub const fn from(self) -> Coord {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Coord {
        self.to
    }

    /// Format in coordinate notation, e.g. `e2e4`.
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parse coordinate notation (`e2e4`).
    pub fn from_uci(s: &str) -> Result<Move, ChessError> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ChessError::InvalidNotation {
                found: s.to_string(),
            });
        }
        let from = parse_square_name(&s[0..2])?;
        let to = parse_square_name(&s[2..4])?;
        Ok(Move::new(from, to))
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Move, ChessError> {
        Move::from_uci(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

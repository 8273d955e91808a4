//! Board coordinates and square names.
//!
//! Rows run top to bottom: row 0 is rank 8, row 7 is rank 1. Columns run
//! left to right from file a (col 0) to file h (col 7).

use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;

/// A square on the 8x8 grid, always in bounds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Top-left corner (row 0, col 0).
    pub const A8: Coord = Coord { row: 0, col: 0 };
    /// Top-right corner.
    pub const H8: Coord = Coord { row: 0, col: 7 };
    /// Bottom-left corner.
    pub const A1: Coord = Coord { row: 7, col: 0 };
    /// Bottom-right corner.
    pub const H1: Coord = Coord { row: 7, col: 7 };

    /// Create a coordinate, failing with [`ChessError::InvalidCoordinate`] when out of bounds.
    pub fn new(row: u8, col: u8) -> Result<Coord, ChessError> {
        if row < 8 && col < 8 {
            Ok(Coord { row, col })
        } else {
            Err(ChessError::coordinate(row.into(), col.into()))
        }
    }

    /// Row index (0 = rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0 = file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Rank number as written in notation (1..=8).
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    /// Step by a row/column delta, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = i32::from(self.row) + i32::from(d_row);
        let col = i32::from(self.col) + i32::from(d_col);
        if is_valid_square(row, col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over all 64 coordinates, row by row from the top.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Coord { row, col }))
    }
}

/// Return `true` if `(row, col)` lies on the board.
#[inline]
pub fn is_valid_square(row: i32, col: i32) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// Map a column index to its file letter (0 -> 'a', 7 -> 'h').
pub fn file_to_char(col: u8) -> Result<char, ChessError> {
    if col < 8 {
        Ok((b'a' + col) as char)
    } else {
        Err(ChessError::InvalidCoordinate {
            found: format!("col {col}"),
        })
    }
}

/// Map a file letter to its column index ('a' -> 0, 'h' -> 7).
pub fn char_to_file(letter: char) -> Result<u8, ChessError> {
    match letter {
        'a'..='h' => Ok(letter as u8 - b'a'),
        _ => Err(ChessError::InvalidCoordinate {
            found: format!("file '{letter}'"),
        }),
    }
}

/// Render a coordinate as a square name such as `e4`.
pub fn square_name(coord: Coord) -> String {
    coord.to_string()
}

/// Parse a square name (`[a-h][1-8]`) into a coordinate.
pub fn parse_square_name(name: &str) -> Result<Coord, ChessError> {
    let invalid = || ChessError::InvalidNotation {
        found: name.to_string(),
    };

    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file_byte = bytes[0];
    let rank_byte = bytes[1];
    if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
        return Err(invalid());
    }

    Ok(Coord {
        row: 8 - (rank_byte - b'0'),
        col: file_byte - b'a',
    })
}

impl FromStr for Coord {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Coord, ChessError> {
        parse_square_name(s)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{file}{}", self.rank())
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {} = {})", self.row, self.col, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_accessors() {
        let c = Coord::new(6, 4).unwrap();
        assert_eq!(c.row(), 6);
        assert_eq!(c.col(), 4);
        assert_eq!(c.rank(), 2);
    }

    #[test]
    fn new_out_of_bounds() {
        assert!(matches!(
            Coord::new(8, 0),
            Err(ChessError::InvalidCoordinate { .. })
        ));
        assert!(Coord::new(0, 8).is_err());
    }

    #[test]
    fn file_letters_roundtrip() {
        for col in 0u8..8 {
            let c = file_to_char(col).unwrap();
            assert_eq!(char_to_file(c).unwrap(), col);
        }
        assert_eq!(file_to_char(0).unwrap(), 'a');
        assert_eq!(file_to_char(7).unwrap(), 'h');
    }

    #[test]
    fn file_letters_out_of_range() {
        assert!(matches!(
            file_to_char(8),
            Err(ChessError::InvalidCoordinate { .. })
        ));
        assert!(char_to_file('i').is_err());
        assert!(char_to_file('A').is_err());
    }

    #[test]
    fn square_names() {
        assert_eq!(square_name(Coord::new(7, 0).unwrap()), "a1");
        assert_eq!(square_name(Coord::new(0, 7).unwrap()), "h8");
        assert_eq!(square_name(Coord::new(4, 4).unwrap()), "e4");
        assert_eq!(parse_square_name("e2").unwrap(), Coord::new(6, 4).unwrap());
        assert_eq!(parse_square_name("a8").unwrap(), Coord::new(0, 0).unwrap());
    }

    #[test]
    fn square_name_roundtrip() {
        for c in Coord::all() {
            assert_eq!(parse_square_name(&square_name(c)).unwrap(), c);
        }
        assert_eq!(Coord::all().count(), 64);
    }

    #[test]
    fn square_name_invalid() {
        for bad in ["i1", "a9", "a0", "", "a", "a1b", "E4", "4e"] {
            assert!(
                matches!(parse_square_name(bad), Err(ChessError::InvalidNotation { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn corner_constants() {
        assert_eq!(Coord::A8.to_string(), "a8");
        assert_eq!(Coord::H8.to_string(), "h8");
        assert_eq!(Coord::A1.to_string(), "a1");
        assert_eq!(Coord::H1.to_string(), "h1");
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Coord::new(7, 0).unwrap();
        assert_eq!(a1.offset(-1, 0), Some(Coord::new(6, 0).unwrap()));
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn valid_square_bounds() {
        assert!(is_valid_square(0, 0));
        assert!(is_valid_square(7, 7));
        assert!(!is_valid_square(-1, 3));
        assert!(!is_valid_square(3, 8));
    }

    #[test]
    fn debug_shows_name() {
        assert_eq!(format!("{:?}", Coord::new(4, 4).unwrap()), "Coord(4, 4 = e4)");
    }
}

//! Error types for notation parsing and coordinate validation.

/// Errors raised by the notation codec and by move generation on malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A square name does not match `[a-h][1-8]`.
    #[error("invalid square name: \"{found}\"")]
    InvalidNotation {
        /// The rejected text.
        found: String,
    },
    /// A placement field or full position record is malformed.
    #[error("invalid position string: {0}")]
    InvalidPositionString(#[from] FenError),
    /// A row, column or file letter lies outside the 8x8 board.
    #[error("coordinate out of bounds: {found}")]
    InvalidCoordinate {
        /// Human-readable rendering of the offending value.
        found: String,
    },
}

impl ChessError {
    pub(crate) fn coordinate(row: i32, col: i32) -> ChessError {
        ChessError::InvalidCoordinate {
            found: format!("row {row}, col {col}"),
        }
    }
}

/// What exactly is wrong with a position string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The full record does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement field does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index, top rank first.
        rank_index: usize,
        /// Number of squares described so far.
        length: usize,
    },
    /// An unrecognized character appeared in the placement field.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// The en passant field is neither "-" nor a square name.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a non-negative integer.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// Which counter ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
}

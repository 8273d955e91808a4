//! Session and shell errors.

use rookery_core::{ChessError, Coord};

/// Errors that can occur while driving a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A position string, square name or coordinate was rejected by the core.
    #[error(transparent)]
    Chess(#[from] ChessError),

    /// The origin square of a move is empty.
    #[error("no piece on {square}")]
    NoPiece {
        /// The empty square.
        square: Coord,
    },

    /// The destination is not among the piece's legal destinations.
    #[error("illegal move: {from} to {to}")]
    IllegalMove {
        /// Origin square.
        from: Coord,
        /// Requested destination.
        to: Coord,
    },

    /// A command line is missing arguments or has too many.
    #[error("malformed command: {line}")]
    MalformedCommand {
        /// The offending line.
        line: String,
    },

    /// `set` named an option the shell does not know.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` gave a value the option cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

//! Simplified algebraic move text.
//!
//! Produces `e4`, `Nf3`, `exd5`, `Bxc6`. There are no check or mate
//! suffixes and no disambiguation between identical pieces.

use crate::coord::{Coord, file_to_char};
use crate::error::ChessError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Format a move for the history list.
///
/// Non-pawns are prefixed with their uppercase letter. Pawn captures are
/// prefixed with `origin_col`'s file letter instead. `x` precedes the
/// destination on captures. Without a `moving_piece` only the square name is
/// produced.
pub fn format_move_notation(
    destination: Coord,
    moving_piece: Option<Piece>,
    is_capture: bool,
    origin_col: u8,
) -> Result<String, ChessError> {
    let mut text = String::with_capacity(6);

    if let Some(piece) = moving_piece {
        match piece.kind().notation_char() {
            Some(letter) => text.push(letter),
            None if is_capture => text.push(file_to_char(origin_col)?),
            None => {}
        }
        if is_capture {
            text.push('x');
        }
    }

    text.push_str(&destination.to_string());
    Ok(text)
}

/// Return `true` if the move resets the fifty-move counter: any pawn move or capture.
pub fn resets_halfmove_clock(piece: Piece, is_capture: bool) -> bool {
    is_capture || piece.kind() == PieceKind::Pawn
}

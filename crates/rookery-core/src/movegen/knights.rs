//! Knight destinations.

use crate::board::Board;
use crate::color::Color;
use crate::directions::KNIGHT_DELTAS;
use crate::error::ChessError;
use crate::piece::Piece;

use super::{Destinations, origin};

/// Generate knight destinations: each L-shaped jump onto an empty or enemy square.
pub fn knight_moves(knight: Piece, board: &Board, turn: Color) -> Result<Destinations, ChessError> {
    let from = origin(knight)?;
    let mut list = Destinations::new();
    if knight.color() != turn {
        return Ok(list);
    }

    for (d_row, d_col) in KNIGHT_DELTAS {
        let Some(dst) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.color_at(dst) != Some(knight.color()) {
            list.push(dst);
        }
    }

    Ok(list)
}

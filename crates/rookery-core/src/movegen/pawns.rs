//! Pawn destinations: pushes and diagonal captures.

use crate::board::Board;
use crate::color::Color;
use crate::directions::PAWN_CAPTURE_COLS;
use crate::error::ChessError;
use crate::piece::Piece;

use super::{Destinations, is_enemy, origin};

/// Generate pawn destinations. No en passant, no promotion.
pub fn pawn_moves(pawn: Piece, board: &Board, turn: Color) -> Result<Destinations, ChessError> {
    let from = origin(pawn)?;
    let mut list = Destinations::new();
    if pawn.color() != turn {
        return Ok(list);
    }

    let forward = pawn.color().forward();

    // --- Pushes ---
    if let Some(one) = from.offset(forward, 0).filter(|&c| board.is_empty_at(c)) {
        list.push(one);

        // Double push needs the intermediate square empty too, which `one` already is
        if from.row() == pawn.color().pawn_home_row() {
            if let Some(two) = one.offset(forward, 0).filter(|&c| board.is_empty_at(c)) {
                list.push(two);
            }
        }
    }

    // --- Captures ---
    for d_col in PAWN_CAPTURE_COLS {
        if let Some(target) = from.offset(forward, d_col) {
            if is_enemy(board, target, pawn.color()) {
                list.push(target);
            }
        }
    }

    Ok(list)
}

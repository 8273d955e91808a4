//! King destinations with the mutual-adjacency restriction.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::directions::KING_DELTAS;
use crate::error::ChessError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use super::{Destinations, origin};

/// Every on-board neighbour of `king`, regardless of turn or occupancy.
///
/// This is the probe used to find the squares an opposing king covers.
pub fn king_adjacency(king: Piece, _board: &Board) -> Result<Destinations, ChessError> {
    let from = origin(king)?;
    let mut list = Destinations::new();
    for (d_row, d_col) in KING_DELTAS {
        if let Some(dst) = from.offset(d_row, d_col) {
            list.push(dst);
        }
    }
    Ok(list)
}

/// Generate king destinations.
///
/// Friendly squares are excluded. If the opposing king stands close enough
/// that the two kings' neighbourhoods overlap, every square in the overlap is
/// removed so the kings never end up adjacent. Attacks from other pieces are
/// not considered.
pub fn legal_king_moves(
    king: Piece,
    board: &Board,
    turn: Color,
) -> Result<Destinations, ChessError> {
    let from = origin(king)?;
    if king.color() != turn {
        return Ok(Destinations::new());
    }

    let mut list = king_adjacency(king, board)?;
    list.retain(|dst| board.color_at(dst) != Some(king.color()));

    if let Some(opposing) = opposing_king_near(from, king.color(), board) {
        let covered = king_adjacency(opposing, board)?;
        list.retain(|dst| !covered.contains(dst));
    }

    Ok(list)
}

/// Find an opposing king within two squares of `from` in both directions.
///
/// Beyond that distance the two neighbourhoods cannot share a square.
fn opposing_king_near(from: Coord, color: Color, board: &Board) -> Option<Piece> {
    (-2i8..=2)
        .flat_map(|d_row| (-2i8..=2).map(move |d_col| (d_row, d_col)))
        .filter(|&delta| delta != (0, 0))
        .filter_map(|(d_row, d_col)| from.offset(d_row, d_col))
        .filter_map(|coord| board.piece_at(coord))
        .find(|p| p.kind() == PieceKind::King && p.color() != color)
}

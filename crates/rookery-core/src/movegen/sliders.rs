//! Sliding piece (bishop, rook, queen) destinations.

use crate::board::Board;
use crate::color::Color;
use crate::error::ChessError;
use crate::piece::Piece;

use super::{Destinations, origin};

/// Generate slider destinations along the piece's direction table.
///
/// Each ray continues over empty squares and stops at the first occupied one,
/// which is included only when it holds an enemy piece.
pub fn sliding_moves(piece: Piece, board: &Board, turn: Color) -> Result<Destinations, ChessError> {
    let from = origin(piece)?;
    let mut list = Destinations::new();
    if piece.color() != turn {
        return Ok(list);
    }

    let kind = piece.kind();
    for &(d_row, d_col) in kind.directions() {
        let mut current = from;
        for _ in 0..kind.max_steps() {
            let Some(next) = current.offset(d_row, d_col) else {
                break;
            };
            match board.color_at(next) {
                None => list.push(next),
                Some(color) => {
                    if color != piece.color() {
                        list.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    fn sq(name: &str) -> Coord {
        name.parse().unwrap()
    }

    fn dests(board: &Board, square: &str, turn: Color) -> Destinations {
        let piece = board.piece_at(sq(square)).unwrap();
        sliding_moves(piece, board, turn).unwrap()
    }

    #[test]
    fn rook_open_board() {
        let board: Board = "4k3/8/8/8/3R4/8/8/4K3".parse().unwrap();
        assert_eq!(dests(&board, "d4", Color::White).len(), 14);
    }

    #[test]
    fn rook_stops_at_capture() {
        // White rook a1, black knight a4: a2, a3, a4 up the file
        let board: Board = "4k3/8/8/8/n7/8/8/R3K3".parse().unwrap();
        let d = dests(&board, "a1", Color::White);
        for name in ["a2", "a3", "a4", "b1", "c1", "d1"] {
            assert!(d.contains(sq(name)), "missing {name}");
        }
        for name in ["a5", "a6", "a7", "a8", "e1"] {
            assert!(!d.contains(sq(name)), "unexpected {name}");
        }
        assert_eq!(d.len(), 6);
    }

    #[test]
    fn bishop_blocked_by_friend() {
        let board = Board::starting_position();
        assert!(dests(&board, "c1", Color::White).is_empty());
    }

    #[test]
    fn bishop_diagonals() {
        let board: Board = "4k3/8/8/8/3B4/8/8/4K3".parse().unwrap();
        let d = dests(&board, "d4", Color::White);
        assert_eq!(d.len(), 13);
        assert!(d.contains(sq("a1")));
        assert!(d.contains(sq("h8")));
        assert!(d.contains(sq("a7")));
        assert!(d.contains(sq("g1")));
        assert!(!d.contains(sq("d5")));
    }

    #[test]
    fn queen_open_board_27() {
        let board: Board = "k7/8/8/8/3Q4/8/8/7K".parse().unwrap();
        // Neither king sits on a line through d4
        assert_eq!(dests(&board, "d4", Color::White).len(), 27);
    }

    #[test]
    fn queen_union_of_rook_and_bishop() {
        let board: Board = "4k3/8/2p5/8/2Q1P3/8/8/4K3".parse().unwrap();
        let queen = dests(&board, "c4", Color::White);
        let as_rook = sliding_moves(Piece::WHITE_ROOK.at(sq("c4")), &board, Color::White).unwrap();
        let as_bishop =
            sliding_moves(Piece::WHITE_BISHOP.at(sq("c4")), &board, Color::White).unwrap();
        assert_eq!(queen.len(), as_rook.len() + as_bishop.len());
        for c in as_rook.iter().chain(as_bishop.iter()) {
            assert!(queen.contains(*c));
        }
    }

    #[test]
    fn wrong_turn_is_empty() {
        let board: Board = "4k3/8/8/8/3q4/8/8/4K3".parse().unwrap();
        assert!(dests(&board, "d4", Color::White).is_empty());
        assert!(!dests(&board, "d4", Color::Black).is_empty());
    }
}

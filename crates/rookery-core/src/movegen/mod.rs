//! Pseudo-legal destination generation.
//!
//! Every generator is a pure function of `(piece, board, turn)`. Asking about
//! a piece of the side not to move yields an empty set, not an error.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::ChessError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

pub use self::king::{king_adjacency, legal_king_moves};
pub use self::knights::knight_moves;
pub use self::pawns::pawn_moves;
pub use self::sliders::sliding_moves;

/// Capacity of [`Destinations`]. A queen on an open board reaches 27 squares.
const MAX_DESTINATIONS: usize = 32;

/// Stack-allocated set of destination squares for one piece.
#[derive(Clone, Copy)]
pub struct Destinations {
    squares: [Coord; MAX_DESTINATIONS],
    len: u8,
}

impl Destinations {
    /// Create an empty set.
    pub const fn new() -> Destinations {
        Destinations {
            squares: [Coord::A8; MAX_DESTINATIONS],
            len: 0,
        }
    }

    /// Add a square. Callers never push the same square twice.
    #[inline]
    pub(crate) fn push(&mut self, coord: Coord) {
        debug_assert!((self.len as usize) < MAX_DESTINATIONS);
        self.squares[self.len as usize] = coord;
        self.len += 1;
    }

    /// Keep only the squares for which `keep` returns `true`, preserving order.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Coord) -> bool) {
        let mut write = 0usize;
        for read in 0..self.len as usize {
            let coord = self.squares[read];
            if keep(coord) {
                self.squares[write] = coord;
                write += 1;
            }
        }
        self.len = write as u8;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.as_slice().contains(&coord)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.squares[..self.len as usize]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.as_slice().iter()
    }

    pub fn to_vec(&self) -> Vec<Coord> {
        self.as_slice().to_vec()
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Destinations {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Destinations {}

impl std::fmt::Debug for Destinations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Return the square `piece` stands on, or fail if it was never placed.
pub(crate) fn origin(piece: Piece) -> Result<Coord, ChessError> {
    piece.position().ok_or_else(|| ChessError::InvalidCoordinate {
        found: format!("{piece:?} has no position"),
    })
}

/// Return `true` if `coord` holds a piece of the opposite color to `color`.
#[inline]
pub(crate) fn is_enemy(board: &Board, coord: Coord, color: Color) -> bool {
    board.color_at(coord).is_some_and(|c| c != color)
}

/// Compute the destinations of `piece` on `board` when it is `turn`'s move.
pub fn legal_destinations(
    piece: Piece,
    board: &Board,
    turn: Color,
) -> Result<Destinations, ChessError> {
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(piece, board, turn),
        PieceKind::Knight => knight_moves(piece, board, turn),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => sliding_moves(piece, board, turn),
        PieceKind::King => legal_king_moves(piece, board, turn),
    }
}

/// Every destination of every piece belonging to `turn`, as moves.
pub fn side_moves(board: &Board, turn: Color) -> Result<Vec<Move>, ChessError> {
    let mut moves = Vec::new();
    for piece in board.pieces_of(turn) {
        let from = origin(piece)?;
        let dests = legal_destinations(piece, board, turn)?;
        moves.extend(dests.iter().map(|&to| Move::new(from, to)));
    }
    Ok(moves)
}

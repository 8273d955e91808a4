//! Offset tables for each piece kind, as `(d_row, d_col)` pairs.

use crate::piece_kind::PieceKind;

/// Orthogonal unit steps.
pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// Diagonal unit steps.
pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal and diagonal unit steps.
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The eight L-shaped knight jumps.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (-1, -2),
    (1, 2),
    (1, -2),
];

/// One step in any direction.
pub const KING_DELTAS: [(i8, i8); 8] = QUEEN_DIRS;

/// Pawn capture columns; the row offset depends on color.
pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];

impl PieceKind {
    /// Offsets this piece steps or slides along.
    ///
    /// Pawns return an empty slice: their movement depends on color and
    /// occupancy and is handled by the pawn generator.
    pub const fn directions(self) -> &'static [(i8, i8)] {
        match self {
            PieceKind::Pawn => &[],
            PieceKind::Knight => &KNIGHT_DELTAS,
            PieceKind::Bishop => &BISHOP_DIRS,
            PieceKind::Rook => &ROOK_DIRS,
            PieceKind::Queen => &QUEEN_DIRS,
            PieceKind::King => &KING_DELTAS,
        }
    }

    /// How far this piece may travel along one of its directions.
    pub const fn max_steps(self) -> u8 {
        if self.is_slider() { 7 } else { 1 }
    }
}

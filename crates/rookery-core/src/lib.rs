//! Core chess rules: board representation, position strings, and per-piece move generation.

mod board;
mod chess_move;
mod color;
mod coord;
mod directions;
mod error;
mod fen;
mod game_state;
mod movegen;
mod notation;
mod piece;
mod piece_kind;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use coord::{Coord, char_to_file, file_to_char, is_valid_square, parse_square_name, square_name};
pub use directions::{BISHOP_DIRS, KING_DELTAS, KNIGHT_DELTAS, QUEEN_DIRS, ROOK_DIRS};
pub use error::{ChessError, FenError};
pub use fen::{Position, STARTING_FEN, parse_board, parse_full_position, serialize_board};
pub use game_state::GameState;
pub use movegen::{
    Destinations, king_adjacency, knight_moves, legal_destinations, legal_king_moves, pawn_moves,
    side_moves, sliding_moves,
};
pub use notation::{format_move_notation, resets_halfmove_clock};
pub use piece::Piece;
pub use piece_kind::PieceKind;

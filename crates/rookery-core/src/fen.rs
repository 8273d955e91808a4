//! FEN-style position strings: the placement field and the full 6-field record.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::coord::{Coord, parse_square_name};
use crate::error::{ChessError, FenError};
use crate::game_state::GameState;
use crate::piece::Piece;

/// The full record for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A board together with the rest of a full position record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Piece placement.
    pub board: Board,
    /// Turn, castling text, en passant square and move counters.
    pub state: GameState,
}

impl Position {
    /// Return the standard starting position.
    pub fn starting() -> Position {
        Position {
            board: Board::starting_position(),
            state: GameState::default(),
        }
    }
}

/// Parse a placement field (`rnbqkbnr/pppppppp/8/...`) into a board.
///
/// Nothing is returned on failure; the board is only handed back once every
/// rank has been validated.
pub fn parse_board(placement: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() }.into());
    }

    let mut board = Board::empty();

    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let row = rank_index as u8;
        let mut col: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c }.into());
                }
                col += digit as u8;
                if col > 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: col as usize,
                    }
                    .into());
                }
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if col >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: col as usize + 1,
                    }
                    .into());
                }
                board.put(Coord::new(row, col)?, piece);
                col += 1;
            }
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col as usize,
            }
            .into());
        }
    }

    trace!(placement, pieces = board.count(), "parsed placement field");
    Ok(board)
}

/// Render a board as a placement field. Inverse of [`parse_board`].
pub fn serialize_board(board: &Board) -> String {
    board.to_string()
}

/// Parse a full 6-field record into a board and its game state.
pub fn parse_full_position(record: &str) -> Result<Position, ChessError> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        }
        .into());
    }

    let board = parse_board(fields[0])?;
    let turn = Color::from_fen_field(fields[1])?;
    let castling = fields[2].to_string();

    let en_passant = if fields[3] == "-" {
        None
    } else {
        Some(
            parse_square_name(fields[3]).map_err(|_| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?,
        )
    };

    let halfmove_clock = parse_counter(fields[4], "halfmove clock")?;
    let fullmove_number = parse_counter(fields[5], "fullmove number")?;

    Ok(Position {
        board,
        state: GameState {
            turn,
            en_passant,
            castling,
            halfmove_clock,
            fullmove_number,
        },
    })
}

fn parse_counter(field: &str, name: &'static str) -> Result<u32, FenError> {
    field.parse::<u32>().map_err(|_| FenError::InvalidMoveCounter {
        field: name,
        found: field.to_string(),
    })
}

impl FromStr for Board {
    type Err = ChessError;

    fn from_str(placement: &str) -> Result<Board, ChessError> {
        parse_board(placement)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().iter().enumerate() {
            let mut empty_count = 0u8;

            for cell in row {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if row_idx < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(record: &str) -> Result<Position, ChessError> {
        parse_full_position(record)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = &self.state;
        write!(f, "{} {} {}", self.board, state.turn, state.castling)?;
        match state.en_passant {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", state.halfmove_clock, state.fullmove_number)
    }
}

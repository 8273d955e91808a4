//! Per-game bookkeeping carried alongside the board in a position record.

use crate::color::Color;
use crate::coord::Coord;

/// The non-placement fields of a full position record.
///
/// The move generator never reads this; it is parsed, stored and rendered
/// back for whoever sequences the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Which side moves next.
    pub turn: Color,
    /// En passant target square, if any.
    pub en_passant: Option<Coord>,
    /// Castling rights, passed through unvalidated.
    pub castling: String,
    /// Halfmove clock for the fifty-move rule.
    pub halfmove_clock: u32,
    /// Fullmove number, starting at 1 and incremented after Black moves.
    pub fullmove_number: u32,
}

impl GameState {
    /// Advance the bookkeeping after `turn` has played a move.
    ///
    /// `resets_clock` should be set for pawn moves and captures. Both counters
    /// stop at `u32::MAX` rather than wrapping.
    pub fn advance(&mut self, resets_clock: bool) {
        if resets_clock {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if self.turn == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.en_passant = None;
        self.turn = self.turn.flip();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            turn: Color::White,
            en_passant: None,
            castling: "KQkq".to_string(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

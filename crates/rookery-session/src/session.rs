//! Game state container: the board, whose turn it is, the current selection and move history.

use tracing::{debug, warn};

use rookery_core::{
    Board, Color, Coord, GameState, Move, Piece, Position, format_move_notation, legal_destinations,
    resets_halfmove_clock,
};

use crate::error::SessionError;

/// One numbered line of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Fullmove number this line belongs to.
    pub number: u32,
    /// White's move text, absent when the game started with Black to move.
    pub white: Option<String>,
    /// Black's move text, absent until Black replies.
    pub black: Option<String>,
}

/// A game in progress.
///
/// The board is never patched in place: each played move swaps in a fresh
/// [`Board`] so observers can compare snapshots cheaply.
#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    selected: Option<Piece>,
    valid_moves: Vec<Coord>,
    last_move: Option<Move>,
    history: Vec<HistoryEntry>,
}

impl GameSession {
    /// Start a session from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::starting())
    }

    /// Start a session from a full position record.
    pub fn from_fen(record: &str) -> Result<Self, SessionError> {
        Ok(Self::from_position(record.parse()?))
    }

    /// Start a session from an already parsed position.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            selected: None,
            valid_moves: Vec::new(),
            last_move: None,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    pub fn state(&self) -> &GameState {
        &self.position.state
    }

    pub fn turn(&self) -> Color {
        self.position.state.turn
    }

    /// Destinations of the selected piece.
    pub fn valid_moves(&self) -> &[Coord] {
        &self.valid_moves
    }

    pub fn selected_piece(&self) -> Option<Piece> {
        self.selected
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn move_history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Render the current full position record.
    pub fn fen(&self) -> String {
        self.position.to_string()
    }

    /// Select the piece on `coord` and compute its destinations.
    ///
    /// Selecting an empty square clears the selection. Selecting a piece of the
    /// side not to move keeps it selected with no destinations.
    pub fn select(&mut self, coord: Coord) -> Result<&[Coord], SessionError> {
        match self.position.board.piece_at(coord) {
            Some(piece) => {
                let dests = legal_destinations(piece, &self.position.board, self.turn())?;
                self.selected = Some(piece);
                self.valid_moves = dests.to_vec();
            }
            None => {
                self.selected = None;
                self.valid_moves.clear();
            }
        }
        Ok(&self.valid_moves)
    }

    pub fn set_selected_piece(&mut self, piece: Option<Piece>) {
        self.selected = piece;
    }

    pub fn set_valid_moves(&mut self, moves: Vec<Coord>) {
        self.valid_moves = moves;
    }

    /// Hand the move to the other side without playing anything.
    pub fn toggle_turn(&mut self) {
        self.position.state.turn = self.turn().flip();
    }

    /// Swap in a new board wholesale, keeping the rest of the game state.
    pub fn replace_board(&mut self, board: Board) {
        self.position.board = board;
        self.selected = None;
        self.valid_moves.clear();
    }

    /// Play `from` -> `to` for the side to move and return the move text.
    pub fn play(&mut self, from: Coord, to: Coord) -> Result<String, SessionError> {
        let board = self.position.board;
        let piece = board
            .piece_at(from)
            .ok_or(SessionError::NoPiece { square: from })?;

        let dests = legal_destinations(piece, &board, self.turn())?;
        if !dests.contains(to) {
            warn!(%from, %to, turn = self.turn().name(), "rejected move");
            return Err(SessionError::IllegalMove { from, to });
        }

        let is_capture = board.piece_at(to).is_some();
        let text = format_move_notation(to, Some(piece), is_capture, from.col())?;
        let mv = Move::new(from, to);

        self.position.board = board.with_move(mv);
        self.record(text.clone());
        self.position
            .state
            .advance(resets_halfmove_clock(piece, is_capture));
        self.last_move = Some(mv);
        self.selected = None;
        self.valid_moves.clear();

        debug!(%mv, %text, "move applied");
        Ok(text)
    }

    fn record(&mut self, text: String) {
        let number = self.position.state.fullmove_number;
        match self.turn() {
            Color::White => self.history.push(HistoryEntry {
                number,
                white: Some(text),
                black: None,
            }),
            Color::Black => match self.history.last_mut() {
                Some(entry) if entry.number == number && entry.black.is_none() => {
                    entry.black = Some(text);
                }
                _ => self.history.push(HistoryEntry {
                    number,
                    white: None,
                    black: Some(text),
                }),
            },
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

//! Shell command parsing.

use rookery_core::{Coord, Move, Position, parse_full_position, parse_square_name};

use crate::error::SessionError;

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `position startpos` or `position fen <record>` -- start a new game from a position.
    Position(Position),
    /// `select <square>` -- select a piece and list its destinations.
    Select(Coord),
    /// `move <from> <to>` or `move <from><to>` -- play a move for the side to move.
    Move(Move),
    /// `moves` -- list every move the side to move has.
    Moves,
    /// `board` -- print the board.
    Board,
    /// `fen` -- print the full position record.
    Fen,
    /// `history` -- print the numbered move list.
    History,
    /// `set <name> <value>` -- change a shell option.
    Set { name: String, value: String },
    /// `new` -- reset to the starting position.
    New,
    /// `quit` -- leave the shell.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of shell input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let malformed = || SessionError::MalformedCommand {
        line: line.trim().to_string(),
    };

    match (tokens[0], &tokens[1..]) {
        ("position", rest) => parse_position(rest).ok_or_else(malformed)?,
        ("select", [square]) => Ok(Command::Select(parse_square_name(square)?)),
        ("move", [uci]) => Ok(Command::Move(Move::from_uci(uci)?)),
        ("move", [from, to]) => Ok(Command::Move(Move::new(
            parse_square_name(from)?,
            parse_square_name(to)?,
        ))),
        ("set", [name, value]) => Ok(Command::Set {
            name: name.to_string(),
            value: value.to_string(),
        }),
        ("moves", []) => Ok(Command::Moves),
        ("board", []) => Ok(Command::Board),
        ("fen", []) => Ok(Command::Fen),
        ("history", []) => Ok(Command::History),
        ("new", []) => Ok(Command::New),
        ("quit", []) => Ok(Command::Quit),
        ("select" | "move" | "set" | "moves" | "board" | "fen" | "history" | "new" | "quit", _) => {
            Err(malformed())
        }
        (other, _) => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos`
/// - `position fen <placement> <turn> <castling> <en-passant> <halfmove> <fullmove>`
///
/// Returns `None` when the keyword or field count is wrong; a record with the
/// right shape but bad content is reported by the codec.
fn parse_position(tokens: &[&str]) -> Option<Result<Command, SessionError>> {
    match tokens {
        ["startpos"] => Some(Ok(Command::Position(Position::starting()))),
        ["fen", fields @ ..] if fields.len() == 6 => Some(
            parse_full_position(&fields.join(" "))
                .map(Command::Position)
                .map_err(SessionError::from),
        ),
        _ => None,
    }
}

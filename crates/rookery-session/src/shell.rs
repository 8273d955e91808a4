//! Line-oriented game shell: reads commands, drives a [`GameSession`], prints results.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{Coord, Position, side_moves};

use crate::command::{Command, parse_command};
use crate::error::SessionError;
use crate::session::GameSession;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Print the board after every played move.
    pub autoboard: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { autoboard: false }
    }
}

impl ShellConfig {
    /// Apply a `set <name> <value>` pair.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), SessionError> {
        match name {
            "autoboard" => {
                self.autoboard = value.parse().map_err(|_| SessionError::InvalidOptionValue {
                    name: name.to_string(),
                    value: value.to_string(),
                })?;
                Ok(())
            }
            _ => Err(SessionError::UnknownOption {
                name: name.to_string(),
            }),
        }
    }
}

/// Whether the loop should keep reading after a command.
enum Flow {
    Continue,
    Quit,
}

/// The interactive shell, holding the game being played.
pub struct GameShell {
    session: GameSession,
    config: ShellConfig,
}

impl GameShell {
    /// Create a shell with the starting position.
    pub fn new() -> Self {
        Self::with_session(GameSession::new())
    }

    /// Create a shell around an existing session.
    pub fn with_session(session: GameSession) -> Self {
        Self {
            session,
            config: ShellConfig::default(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// Command errors are reported on `output` and the loop continues; only
    /// I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), SessionError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = parse_command(trimmed).and_then(|cmd| self.dispatch(cmd, &mut output));
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(SessionError::Io { source }) => return Err(SessionError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("rookery shell shutting down");
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, SessionError> {
        match cmd {
            Command::Position(pos) => self.handle_position(pos, out)?,
            Command::Select(coord) => self.handle_select(coord, out)?,
            Command::Move(mv) => self.handle_move(mv.from(), mv.to(), out)?,
            Command::Moves => self.handle_moves(out)?,
            Command::Board => writeln!(out, "{}", self.session.board().pretty())?,
            Command::Fen => writeln!(out, "{}", self.session.fen())?,
            Command::History => self.handle_history(out)?,
            Command::Set { name, value } => self.config.apply(&name, &value)?,
            Command::New => self.handle_position(Position::starting(), out)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => {
                debug!(cmd = %name, "ignoring unknown command");
                writeln!(out, "unknown command: {name}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_position<W: Write>(
        &mut self,
        pos: Position,
        out: &mut W,
    ) -> Result<(), SessionError> {
        self.session = GameSession::from_position(pos);
        if self.config.autoboard {
            writeln!(out, "{}", self.session.board().pretty())?;
        }
        Ok(())
    }

    fn handle_select<W: Write>(&mut self, coord: Coord, out: &mut W) -> Result<(), SessionError> {
        let dests = self.session.select(coord)?;
        if dests.is_empty() {
            writeln!(out, "{coord}: (none)")?;
        } else {
            let mut names: Vec<String> = dests.iter().map(Coord::to_string).collect();
            names.sort();
            writeln!(out, "{coord}: {}", names.join(" "))?;
        }
        Ok(())
    }

    fn handle_move<W: Write>(
        &mut self,
        from: Coord,
        to: Coord,
        out: &mut W,
    ) -> Result<(), SessionError> {
        let text = self.session.play(from, to)?;
        writeln!(out, "played {text}")?;
        if self.config.autoboard {
            writeln!(out, "{}", self.session.board().pretty())?;
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        let moves = side_moves(self.session.board(), self.session.turn())?;
        let list: Vec<String> = moves.iter().map(|m| m.to_uci()).collect();
        writeln!(out, "{} moves: {}", moves.len(), list.join(" "))?;
        Ok(())
    }

    fn handle_history<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        for entry in self.session.move_history() {
            let white = entry.white.as_deref().unwrap_or("...");
            match entry.black.as_deref() {
                Some(black) => writeln!(out, "{}. {white} {black}", entry.number)?,
                None => writeln!(out, "{}. {white}", entry.number)?,
            }
        }
        Ok(())
    }
}

impl Default for GameShell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (GameShell, String) {
        let mut shell = GameShell::new();
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn config_defaults() {
        assert!(!ShellConfig::default().autoboard);
    }

    #[test]
    fn config_apply() {
        let mut config = ShellConfig::default();
        config.apply("autoboard", "true").unwrap();
        assert!(config.autoboard);
        assert!(matches!(
            config.apply("autoboard", "maybe"),
            Err(SessionError::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            config.apply("colour", "on"),
            Err(SessionError::UnknownOption { .. })
        ));
    }

    #[test]
    fn select_lists_sorted_destinations() {
        let (_, out) = run_script("select b1\nselect e4\n");
        assert_eq!(out, "b1: a3 c3\ne4: (none)\n");
    }

    #[test]
    fn move_prints_text() {
        let (shell, out) = run_script("move e2 e4\nmove g8f6\n");
        assert_eq!(out, "played e4\nplayed Nf6\n");
        assert_eq!(shell.session().move_history().len(), 1);
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let (shell, out) = run_script("move e2 e5\nselect q9\nmove e2 e4\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("error: illegal move"));
        assert!(lines[1].starts_with("error: "));
        assert_eq!(lines[2], "played e4");
        assert_eq!(shell.session().state().fullmove_number, 1);
    }

    #[test]
    fn quit_stops_reading() {
        let (shell, out) = run_script("quit\nmove e2 e4\n");
        assert!(out.is_empty());
        assert!(shell.session().last_move().is_none());
    }

    #[test]
    fn history_output() {
        let (_, out) = run_script("move e2 e4\nmove e7 e5\nmove g1 f3\nhistory\n");
        assert_eq!(
            out,
            "played e4\nplayed e5\nplayed Nf3\n1. e4 e5\n2. Nf3\n"
        );
    }

    #[test]
    fn fen_and_new() {
        let (_, out) = run_script("move e2 e4\nfen\nnew\nfen\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[1],
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
        assert_eq!(
            lines[2],
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn moves_from_start() {
        let (_, out) = run_script("moves\n");
        assert!(out.starts_with("20 moves: "));
    }

    #[test]
    fn unknown_command_is_reported() {
        let (_, out) = run_script("dance\n");
        assert_eq!(out, "unknown command: dance\n");
    }

    #[test]
    fn autoboard_prints_board() {
        let mut shell = GameShell::new();
        let mut out = Vec::new();
        shell
            .run("set autoboard true\nmove e2 e4\n".as_bytes(), &mut out)
            .unwrap();
        assert!(shell.config().autoboard);
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("played e4\n8  r n b q k b n r\n"));
        assert!(out.contains("4  . . . . P . . .\n"));
    }
}

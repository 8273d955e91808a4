//! Interactive play on top of `rookery-core`: game sessions, command parsing and the text shell.

pub mod command;
pub mod error;
pub mod session;
pub mod shell;

pub use command::{Command, parse_command};
pub use error::SessionError;
pub use session::{GameSession, HistoryEntry};
pub use shell::{GameShell, ShellConfig};

use std::io;

use anyhow::{Context, Result};
use tracing::info;

use rookery_session::{GameSession, GameShell};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("rookery starting");

    // Any arguments are taken as a full position record to start from
    let record = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let session = if record.is_empty() {
        GameSession::new()
    } else {
        GameSession::from_fen(&record)
            .with_context(|| format!("invalid starting position: {record}"))?
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    GameShell::with_session(session).run(stdin.lock(), stdout.lock())?;
    Ok(())
}

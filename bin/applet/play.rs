use crate::{io::Io, terminal::Terminal};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::History;
use ron::ser::{to_string_pretty, PrettyConfig};
use std::io::{stdin, stdout, Read, Write};
use std::{fs, path::Path, path::PathBuf};
use tracing::{info, instrument};

/// Play a game on the terminal, both sides taking turns at the keyboard.
#[derive(Debug, Default, Parser)]
pub struct Play {
    /// Write the history of the game to this file as RON on exit.
    #[clap(short, long)]
    record: Option<PathBuf>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.session(Io::new(stdout(), stdin()))
    }

    /// Runs a session, recording the game even if the session is cut short by an error.
    fn session<W: Write, R: Read>(&self, io: Io<W, R>) -> Result<(), Anyhow> {
        let mut terminal = Terminal::new(io);
        let result = terminal.run();

        if let Some(path) = &self.record {
            record(terminal.game().history(), path)?;
        }

        result
    }
}

/// Writes a [`History`] to a file as RON.
#[instrument(level = "trace", skip(history), err)]
fn record(history: &History, path: &Path) -> Result<(), Anyhow> {
    let ron = to_string_pretty(history, PrettyConfig::default())?;

    fs::write(path, ron)
        .with_context(|| format!("failed to record the game to `{}`", path.display()))?;

    info!(path = %path.display(), moves = history.moves(), "game recorded");

    Ok(())
}

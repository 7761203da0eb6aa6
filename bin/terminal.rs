use crate::{command::Command, io::Io};
use anyhow::Error as Anyhow;
use lib::chess::{Game, Position, Status};
use std::io::{ErrorKind, Read, Write};
use tracing::{info, instrument, warn};

/// An interactive session for two players sharing the same terminal.
pub struct Terminal<W: Write, R: Read> {
    io: Io<W, R>,
    game: Game,
}

impl<W: Write, R: Read> Terminal<W, R> {
    pub fn new(io: Io<W, R>) -> Self {
        Terminal {
            io,
            game: Game::new(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn show(&mut self) -> Result<(), Anyhow> {
        self.io.send(self.game.board())?;

        match self.game.status() {
            Status::InProgress => self.io.send(format_args!("turn: {}", self.game.turn()))?,
            status => self.io.send(status)?,
        }

        Ok(())
    }

    fn moves(&mut self, whence: Position) -> Result<(), Anyhow> {
        let targets = self.game.legal_moves(whence);

        if targets.is_empty() {
            self.io.send(format_args!("no legal moves from `{whence}`"))?;
        } else {
            let list = Vec::from_iter(targets.iter().map(|p| p.to_string()));
            self.io.send(format_args!("{whence}: {}", list.join(" ")))?;
        }

        Ok(())
    }

    /// Runs the session until `quit` or the end of the input.
    #[instrument(level = "trace", skip(self), err)]
    pub fn run(&mut self) -> Result<(), Anyhow> {
        self.show()?;

        loop {
            self.io.flush()?;

            let line = match self.io.recv() {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break Ok(()),
                Err(e) => break Err(e.into()),
            };

            if line.trim().is_empty() {
                continue;
            }

            match line.parse() {
                Ok(Command::Quit) => break Ok(()),

                Ok(Command::Moves(whence)) => self.moves(whence)?,

                Ok(Command::Move(m)) => match self.game.make(m.whence(), m.whither()) {
                    Ok(()) => self.show()?,
                    Err(e) => self.io.send(format_args!("error: {e}"))?,
                },

                Ok(Command::Undo) => {
                    if self.game.undo() {
                        self.show()?;
                    } else {
                        self.io.send("error: there is no move to undo")?;
                    }
                }

                Ok(Command::New) => {
                    info!(moves = self.game.history().moves(), "starting a new game");
                    self.game = Game::new();
                    self.show()?;
                }

                Err(e) => {
                    warn!(%line, "invalid command");
                    self.io.send(format_args!("error: {e}"))?;
                }
            }
        }
    }
}

use crate::chess::{Color, Position, Status};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move of a piece from one [`Position`] to another.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{_0}{_1}")]
pub struct Move(pub Position, pub Position);

impl Move {
    /// The source [`Position`].
    #[inline]
    pub fn whence(&self) -> Position {
        self.0
    }

    /// The destination [`Position`].
    #[inline]
    pub fn whither(&self) -> Position {
        self.1
    }
}

/// The reason why a [`Move`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum MoveError {
    #[display(fmt = "the game is over, {_0}")]
    GameOver(#[error(not(source))] Status),

    #[display(fmt = "there is no piece on `{_0}`")]
    NoPiece(#[error(not(source))] Position),

    #[display(fmt = "the {_0} pieces cannot move during the opponent's turn")]
    NotYourTurn(#[error(not(source))] Color),

    #[display(fmt = "move `{_0}` is illegal")]
    IllegalTarget(#[error(not(source))] Move),
}

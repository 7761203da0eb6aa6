use crate::chess::{Board, Color};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Whether the game is still being played or who won it.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Status {
    #[default]
    #[display(fmt = "in progress")]
    InProgress,
    #[display(fmt = "white won")]
    WhiteWon,
    #[display(fmt = "black won")]
    BlackWon,
}

impl Status {
    /// The status of a game won by a [`Color`].
    #[inline]
    pub fn won_by(c: Color) -> Self {
        match c {
            Color::White => Status::WhiteWon,
            Color::Black => Status::BlackWon,
        }
    }

    /// The status implied by which kings are still on a [`Board`].
    ///
    /// A side wins once the opposing king is gone while its own king remains.
    ///
    /// This agrees with [`Game::make`][`crate::chess::Game::make`] as long as each side has at
    /// most one king.
    pub fn of(board: &Board) -> Self {
        match (board.king(Color::White), board.king(Color::Black)) {
            (Some(_), None) => Status::WhiteWon,
            (None, Some(_)) => Status::BlackWon,
            _ => Status::InProgress,
        }
    }

    /// Whether the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        *self != Status::InProgress
    }
}

use crate::chess::{Color, Movement, Position, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A [piece][`Role`] of a certain [`Color`].
///
/// Pieces don't know where they stand, their [`Position`] is wherever the
/// [`Board`][`crate::chess::Board`] holds them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    #[inline]
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    #[inline]
    pub fn role(&self) -> Role {
        self.1
    }

    /// How this piece moves when standing on a given [`Position`].
    #[inline]
    pub fn movement(&self, whence: Position) -> Movement {
        Movement::of(*self, whence)
    }

    fn figure(&self) -> char {
        use Color::*;
        use Role::*;
        match (self.0, self.1) {
            (White, Pawn) => '♙',
            (White, Knight) => '♘',
            (White, Bishop) => '♗',
            (White, Rook) => '♖',
            (White, Queen) => '♕',
            (White, King) => '♔',
            (Black, Pawn) => '♟',
            (Black, Knight) => '♞',
            (Black, Bishop) => '♝',
            (Black, Rook) => '♜',
            (Black, Queen) => '♛',
            (Black, King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.figure())
    }
}

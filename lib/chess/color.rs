use crate::chess::Direction;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Not;

/// The color of a [`Piece`][`crate::chess::Piece`] and of the side to move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The row where this side's major pieces start.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The row where this side's pawns start.
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The [`Direction`] this side's pawns advance towards.
    #[inline]
    pub const fn forward(self) -> &'static [Direction] {
        match self {
            Color::White => &[Direction::North],
            Color::Black => &[Direction::South],
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

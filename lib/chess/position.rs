use crate::chess::Direction;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// The reason why a coordinate does not name a square on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "coordinate `({_0}, {_1})` is outside the board")]
pub struct OutOfBounds(pub i8, pub i8);

/// A square on the board.
///
/// Columns are counted by `x` from the left and rows by `y` from the top, both in the range
/// `(0..8)`. Black starts on rows `0` and `1`, white on rows `6` and `7`.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(try_from = "(i8, i8)", into = "(i8, i8)")]
pub struct Position {
    #[cfg_attr(test, strategy(0..BOARD_SIZE))]
    y: i8,
    #[cfg_attr(test, strategy(0..BOARD_SIZE))]
    x: i8,
}

impl Position {
    /// Constructs [`Position`] from a pair of coordinates.
    #[inline]
    pub fn new(x: i8, y: i8) -> Result<Self, OutOfBounds> {
        if (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y) {
            Ok(Position { x, y })
        } else {
            Err(OutOfBounds(x, y))
        }
    }

    /// The column in the range `(0..8)`.
    #[inline]
    pub fn x(&self) -> i8 {
        self.x
    }

    /// The row in the range `(0..8)`.
    #[inline]
    pub fn y(&self) -> i8 {
        self.y
    }

    /// The neighboring [`Position`] in a [`Direction`].
    #[inline]
    pub fn step(&self, d: Direction) -> Result<Self, OutOfBounds> {
        let (dx, dy) = d.delta();
        self.offset(dx, dy)
    }

    /// The [`Position`] displaced by an arbitrary offset.
    #[inline]
    pub fn offset(&self, dx: i8, dy: i8) -> Result<Self, OutOfBounds> {
        Position::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// This position's index in the range `(0..64)`, row by row.
    #[inline]
    pub fn index(&self) -> usize {
        (self.y * BOARD_SIZE + self.x) as usize
    }

    /// Constructs [`Position`] from its [index][`Position::index`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range `(0..64)`.
    #[inline]
    pub fn from_index(i: usize) -> Self {
        assert!(i < 64, "index `{i}` is outside the board");
        let i = i as i8;
        Position {
            x: i % BOARD_SIZE,
            y: i / BOARD_SIZE,
        }
    }

    /// Returns an iterator over all [`Position`]s ordered by [index][`Position::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(Position::from_index)
    }
}

impl TryFrom<(i8, i8)> for Position {
    type Error = OutOfBounds;

    #[inline]
    fn try_from((x, y): (i8, i8)) -> Result<Self, Self::Error> {
        Position::new(x, y)
    }
}

impl From<Position> for (i8, i8) {
    #[inline]
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.x as u8);
        let rank = char::from(b'0' + (BOARD_SIZE - self.y) as u8);
        write!(f, "{file}{rank}")
    }
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParsePositionError {
    #[display(fmt = "failed to parse square, expected letter in the range `('a'..='h')`")]
    InvalidFile,
    #[display(fmt = "failed to parse square, expected digit in the range `('1'..='8')`")]
    InvalidRank,
    #[display(fmt = "failed to parse square, expected exactly two characters")]
    InvalidLength,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(ParsePositionError::InvalidLength),
        };

        if !('a'..='h').contains(&file) {
            return Err(ParsePositionError::InvalidFile);
        }

        if !('1'..='8').contains(&rank) {
            return Err(ParsePositionError::InvalidRank);
        }

        let x = (file as u8 - b'a') as i8;
        let y = BOARD_SIZE - (rank as u8 - b'0') as i8;
        Position::new(x, y).map_err(|_| ParsePositionError::InvalidRank)
    }
}

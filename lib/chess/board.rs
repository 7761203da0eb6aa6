use crate::chess::{Bitboard, Color, Piece, Position, Role, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Index};

/// The placement of [`Piece`]s on the board.
///
/// This type does not validate whether the placement it holds is reachable by playing the game.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        vec![any::<Option<Piece>>(); 64]
            .prop_map(|v| Position::iter().zip(v).collect::<Board>())
            .boxed()
    }
}

impl Board {
    /// The standard starting placement.
    ///
    /// Black occupies the rows `0` and `1`, white the rows `6` and `7`.
    pub fn initial() -> Self {
        use Role::*;
        const BACK: [Role; 8] = [Rook, Knight, Bishop, King, Queen, Bishop, Knight, Rook];

        let mut board = Board::default();

        for c in Color::ALL {
            for (x, r) in (0..BOARD_SIZE).zip(BACK) {
                board.rows[c.back_row() as usize][x as usize] = Some(Piece(c, r));
                board.rows[c.pawn_row() as usize][x as usize] = Some(Piece(c, Pawn));
            }
        }

        board
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::iter().filter_map(|p| Some((p, self[p]?)))
    }

    /// An iterator over the pieces of a [`Color`].
    pub fn by_color(&self, c: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.color() == c)
    }

    /// [`Position`]s occupied by pieces of a [`Color`].
    pub fn occupied_by(&self, c: Color) -> Bitboard {
        self.by_color(c).map(|(p, _)| p).collect()
    }

    /// The [`Position`] of the king of a [`Color`], if it is still on the board.
    pub fn king(&self, c: Color) -> Option<Position> {
        self.by_color(c)
            .find(|(_, piece)| piece.role() == Role::King)
            .map(|(p, _)| p)
    }

    /// Places a [`Piece`] on a [`Position`], returning whichever piece stood there.
    pub(crate) fn place(&mut self, p: Position, piece: Piece) -> Option<Piece> {
        self.slot(p).replace(piece)
    }

    /// Removes the [`Piece`] on a [`Position`], if any.
    pub(crate) fn remove(&mut self, p: Position) -> Option<Piece> {
        self.slot(p).take()
    }

    /// Moves the piece on `whence` to `whither`, returning the piece it replaced.
    ///
    /// Nothing changes if `whence` is empty.
    pub(crate) fn relocate(&mut self, whence: Position, whither: Position) -> Option<Piece> {
        let piece = self.remove(whence)?;
        self.place(whither, piece)
    }

    fn slot(&mut self, p: Position) -> &mut Option<Piece> {
        &mut self.rows[p.y() as usize][p.x() as usize]
    }
}

/// Retrieves the [`Piece`] at a given [`Position`], if any.
impl Index<Position> for Board {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, p: Position) -> &Self::Output {
        &self.rows[p.y() as usize][p.x() as usize]
    }
}

impl FromIterator<(Position, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Position, Piece)>>(iter: I) -> Self {
        let mut board = Board::default();
        for (p, piece) in iter {
            board.place(p, piece);
        }

        board
    }
}

impl FromIterator<(Position, Option<Piece>)> for Board {
    fn from_iter<I: IntoIterator<Item = (Position, Option<Piece>)>>(iter: I) -> Self {
        iter.into_iter()
            .filter_map(|(p, piece)| Some((p, piece?)))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FILES: &str = "    a   b   c   d   e   f   g   h";
        const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";

        writeln!(f, "{FILES}")?;
        writeln!(f, "{SEPARATOR}")?;

        for (y, row) in self.rows.iter().enumerate() {
            let rank = BOARD_SIZE as usize - y;
            write!(f, "{rank} |")?;

            for &piece in row {
                match piece {
                    Some(piece) => write!(f, " {piece} |")?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {rank}")?;
            writeln!(f, "{SEPARATOR}")?;
        }

        write!(f, "{FILES}")
    }
}

use crate::chess::{Position, BOARD_SIZE};
use derive_more::{BitAnd, BitOr, Not};
use std::fmt::{self, Write};

/// A set of [`Position`]s on the board.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, BitAnd, BitOr, Not)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(transparent)]
pub struct Bitboard(u64);

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for p in Position::iter() {
            f.write_char(if self.contains(p) { '■' } else { '◻' })?;
            f.write_char(if p.x() < BOARD_SIZE - 1 { ' ' } else { '\n' })?;
        }

        Ok(())
    }
}

impl Bitboard {
    /// An empty set.
    #[inline]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// The number of [`Position`]s in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether a [`Position`] is in the set.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.0 & (1u64 << p.index()) != 0
    }

    /// Returns the set with a [`Position`] added.
    #[inline]
    pub fn with(self, p: Position) -> Self {
        Bitboard(self.0 | 1u64 << p.index())
    }

    /// An iterator over the [`Position`]s in the set, ordered by [index][`Position::index`].
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter(self.0)
    }
}

impl From<Position> for Bitboard {
    #[inline]
    fn from(p: Position) -> Self {
        Bitboard::empty().with(p)
    }
}

impl FromIterator<Position> for Bitboard {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::empty(), Bitboard::with)
    }
}

impl IntoIterator for Bitboard {
    type Item = Position;
    type IntoIter = Iter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the [`Position`]s in a [`Bitboard`].
#[derive(Debug, Clone)]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let i = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            Some(Position::from_index(i))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_strategy::proptest;

    #[test]
    fn empty_set_has_no_positions() {
        assert!(Bitboard::empty().is_empty());
        assert_eq!(Bitboard::empty().iter().next(), None);
    }

    #[test]
    fn complement_of_the_empty_set_has_every_position() {
        assert_eq!(Vec::from_iter(!Bitboard::empty()), Vec::from_iter(Position::iter()));
    }

    #[proptest]
    fn set_contains_added_position(bb: Bitboard, p: Position) {
        assert!(bb.with(p).contains(p));
    }

    #[proptest]
    fn len_counts_positions_in_the_set(bb: Bitboard) {
        assert_eq!(bb.len(), bb.iter().count());
        assert_eq!(bb.iter().len(), bb.len());
    }

    #[proptest]
    fn collecting_iterated_positions_is_an_identity(bb: Bitboard) {
        assert_eq!(Bitboard::from_iter(bb), bb);
    }

    #[proptest]
    fn set_iterates_in_index_order(bb: Bitboard) {
        let v = Vec::from_iter(bb);
        assert!(v.windows(2).all(|w| w[0].index() < w[1].index()));
    }

    #[proptest]
    fn set_operations_match_hash_set(a: Bitboard, b: Bitboard) {
        let x = HashSet::<Position>::from_iter(a);
        let y = HashSet::<Position>::from_iter(b);
        let all = HashSet::<Position>::from_iter(Position::iter());

        assert_eq!(HashSet::from_iter(a & b), &x & &y);
        assert_eq!(HashSet::from_iter(a | b), &x | &y);
        assert_eq!(HashSet::from_iter(!a), &all - &x);
    }
}

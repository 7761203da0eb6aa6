use crate::chess::{Board, Color};
use derive_more::Deref;
use serde::{Deserialize, Serialize};

/// A frozen copy of the [`Board`] and the side to move at some point of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Snapshot {
    board: Board,
    turn: Color,
}

impl Snapshot {
    /// Captures a [`Board`] and the side to move.
    #[inline]
    pub fn new(board: Board, turn: Color) -> Self {
        Snapshot { board, turn }
    }

    /// The captured [`Board`].
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move at the time of capture.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }
}

/// The sequence of [`Snapshot`]s taken since the start of the game.
///
/// The first snapshot is always the starting setup, so a history is never empty.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deref)]
#[serde(transparent)]
pub struct History(Vec<Snapshot>);

impl History {
    /// Starts a history from the initial [`Snapshot`].
    #[inline]
    pub fn new(initial: Snapshot) -> Self {
        History(vec![initial])
    }

    /// The most recent [`Snapshot`].
    #[inline]
    pub fn last(&self) -> &Snapshot {
        match self.0.last() {
            Some(s) => s,
            None => unreachable!("history is never empty"),
        }
    }

    /// The number of moves played since the initial [`Snapshot`].
    #[inline]
    pub fn moves(&self) -> usize {
        self.0.len() - 1
    }

    pub(crate) fn push(&mut self, s: Snapshot) {
        self.0.push(s);
    }

    /// Drops the most recent [`Snapshot`], unless it is the initial one.
    pub(crate) fn pop(&mut self) -> Option<Snapshot> {
        if self.0.len() > 1 {
            self.0.pop()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Position;
    use proptest::{collection::vec, prelude::*};
    use test_strategy::proptest;

    #[proptest]
    fn snapshot_holds_board_and_turn(b: Board, c: Color) {
        let s = Snapshot::new(b, c);
        assert_eq!(s.board(), &b);
        assert_eq!(s.turn(), c);
    }

    #[proptest]
    fn snapshot_is_unaffected_by_changes_to_the_original_board(
        b: Board,
        c: Color,
        p: Position,
    ) {
        let mut live = b;
        let s = Snapshot::new(live, c);
        live.remove(p);
        assert_eq!(s.board(), &b);
    }

    #[proptest]
    fn history_starts_with_the_initial_snapshot(s: Snapshot) {
        let h = History::new(s);
        assert_eq!(h.len(), 1);
        assert_eq!(h.moves(), 0);
        assert_eq!(h.last(), &s);
    }

    #[proptest]
    fn history_never_drops_the_initial_snapshot(s: Snapshot, t: Snapshot) {
        let mut h = History::new(s);
        h.push(t);
        assert_eq!(h.pop(), Some(t));
        assert_eq!(h.pop(), None);
        assert_eq!(h.last(), &s);
    }

    #[proptest]
    fn history_grows_by_one_snapshot_per_push(
        s: Snapshot,
        #[strategy(vec(any::<Snapshot>(), 0..8))] ts: Vec<Snapshot>,
    ) {
        let mut h = History::new(s);
        for &t in &ts {
            h.push(t);
        }

        assert_eq!(h.len(), ts.len() + 1);
        assert_eq!(h.moves(), ts.len());
    }
}

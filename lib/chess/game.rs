use crate::chess::{Bitboard, Board, Color, History, Move, MoveError, Piece, Position, Role};
use crate::chess::{Snapshot, Status};
use tracing::{debug, info, instrument};

/// A game between two sides, from the starting setup until one king is captured.
///
/// The game owns the live [`Board`] and only ever changes it through [`Game::make`] and
/// [`Game::undo`], callers get read access only.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    turn: Color,
    status: Status,
    history: History,
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Game {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Game>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{prelude::*, sample::Selector};

        (0..64usize, any::<Selector>())
            .prop_map(|(n, selector)| {
                let mut game = Game::new();
                for _ in 0..n {
                    match selector.try_select(game.moves()) {
                        Some(m) => game.make(m.whence(), m.whither()).unwrap(),
                        None => break,
                    }
                }

                game
            })
            .no_shrink()
            .boxed()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Starts a new game from the standard setup with white to move.
    pub fn new() -> Self {
        Game::with_board(Board::initial(), Color::White)
    }

    /// Starts a game from an arbitrary [`Board`] and side to move.
    ///
    /// The [`Status`] is derived from which kings are on the board, see [`Status::of`].
    /// Each side is assumed to have at most one king: [`Game::make`] ends the game as soon as
    /// any king is captured, whereas [`Status::of`] only declares a winner once a side has no
    /// king left.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            status: Status::of(&board),
            history: History::new(Snapshot::new(board, turn)),
        }
    }

    /// The current [`Board`].
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Whether the game is still being played or who won it.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The [`Snapshot`]s taken since the start of the game.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The [`Piece`] on a [`Position`], if any.
    #[inline]
    pub fn piece(&self, p: Position) -> Option<Piece> {
        self.board[p]
    }

    /// An iterator over all pieces on the board.
    #[inline]
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.board.iter()
    }

    /// An iterator over the pieces of a [`Color`].
    #[inline]
    pub fn by_color(&self, c: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.board.by_color(c)
    }

    /// The [`Position`]s the piece on `whence` may move to.
    ///
    /// Empty if the game is over, if there is no piece on `whence`, or if it belongs to the
    /// side not to move.
    pub fn legal_moves(&self, whence: Position) -> Bitboard {
        match self.mover(whence) {
            Ok(piece) => piece.movement(whence).targets(&self.board, whence, piece),
            Err(_) => Bitboard::empty(),
        }
    }

    /// An iterator over every legal [`Move`] of the side to move.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.board
            .by_color(self.turn)
            .flat_map(move |(p, _)| self.legal_moves(p).into_iter().map(move |q| Move(p, q)))
    }

    /// Moves the piece on `whence` to `whither` if legal, otherwise returns the reason why not.
    ///
    /// Capturing the opposing king ends the game. The turn passes to the opponent even then.
    #[instrument(level = "debug", skip(self), err, fields(turn = %self.turn))]
    pub fn make(&mut self, whence: Position, whither: Position) -> Result<(), MoveError> {
        let piece = self.mover(whence)?;

        if !piece.movement(whence).targets(&self.board, whence, piece).contains(whither) {
            return Err(MoveError::IllegalTarget(Move(whence, whither)));
        }

        if let Some(captured) = self.board.relocate(whence, whither) {
            debug!(color = %captured.color(), role = %captured.role(), at = %whither, "capture");

            if captured.role() == Role::King {
                self.status = Status::won_by(piece.color());
                info!(status = %self.status, "king captured");
            }
        }

        self.turn = !self.turn;
        self.history.push(Snapshot::new(self.board, self.turn));

        Ok(())
    }

    /// Takes back the last move, returning whether there was any.
    ///
    /// The [`Status`] is recomputed from the restored [`Board`].
    #[instrument(level = "debug", skip(self), ret)]
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }

        let last = *self.history.last();
        self.board = *last.board();
        self.turn = last.turn();
        self.status = Status::of(&self.board);

        true
    }

    fn mover(&self, whence: Position) -> Result<Piece, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver(self.status));
        }

        let piece = self.board[whence].ok_or(MoveError::NoPiece(whence))?;

        if piece.color() != self.turn {
            return Err(MoveError::NotYourTurn(piece.color()));
        }

        Ok(piece)
    }
}

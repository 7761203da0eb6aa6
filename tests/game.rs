use anyhow::Error as Anyhow;
use lib::chess::{Board, Color, Game, Move, MoveError, Piece, Position, Role, Snapshot, Status};
use proptest::{prelude::*, sample::Selector};
use ron::ser::{to_string_pretty, PrettyConfig};
use test_strategy::proptest;

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

#[test]
fn fresh_rooks_have_no_legal_moves() {
    let game = Game::new();
    for p in ["a1", "h1", "a8", "h8"].map(pos) {
        assert!(game.legal_moves(p).is_empty());
    }
}

#[test]
fn king_capturing_the_opposing_king_wins_the_game() {
    let board = Board::from_iter([
        (pos("c3"), Piece(Color::Black, Role::King)),
        (pos("d2"), Piece(Color::White, Role::King)),
        (pos("h1"), Piece(Color::White, Role::Rook)),
    ]);

    let mut game = Game::with_board(board, Color::Black);
    assert_eq!(game.make(pos("c3"), pos("d2")), Ok(()));
    assert_eq!(game.status(), Status::BlackWon);
    assert_eq!(game.status().to_string(), "black won");

    assert_eq!(
        game.make(pos("h1"), pos("h8")),
        Err(MoveError::GameOver(Status::BlackWon))
    );
}

#[test]
fn one_move_then_undo_reproduces_the_initial_game() {
    let mut game = Game::new();
    let pieces = Vec::from_iter(game.pieces());

    game.make(pos("g1"), pos("f3")).unwrap();
    assert_eq!(game.turn(), Color::Black);

    assert!(game.undo());
    assert_eq!(Vec::from_iter(game.pieces()), pieces);
    assert_eq!(game.turn(), Color::White);
    assert!(!game.undo());
}

#[test]
fn pawns_capture_straight_ahead_only() {
    let board = Board::from_iter([
        (pos("e4"), Piece(Color::White, Role::Pawn)),
        (pos("e5"), Piece(Color::Black, Role::Pawn)),
        (pos("d5"), Piece(Color::Black, Role::Knight)),
        (pos("a1"), Piece(Color::White, Role::King)),
        (pos("a8"), Piece(Color::Black, Role::King)),
    ]);

    let mut game = Game::with_board(board, Color::White);
    assert_eq!(game.legal_moves(pos("e4")).iter().collect::<Vec<_>>(), [pos("e5")]);
    assert_eq!(
        game.make(pos("e4"), pos("d5")),
        Err(MoveError::IllegalTarget(Move(pos("e4"), pos("d5"))))
    );

    assert_eq!(game.make(pos("e4"), pos("e5")), Ok(()));
    assert_eq!(game.piece(pos("e5")), Some(Piece(Color::White, Role::Pawn)));
}

#[proptest]
fn random_playouts_alternate_turns_until_a_king_falls(
    #[strategy(1usize..256)] n: usize,
    selector: Selector,
) {
    let mut game = Game::new();

    for _ in 0..n {
        let turn = game.turn();
        let m = match selector.try_select(game.moves()) {
            Some(m) => m,
            None => break,
        };

        let target = game.piece(m.whither());
        game.make(m.whence(), m.whither())?;
        assert_eq!(game.turn(), !turn);

        match target {
            Some(Piece(_, Role::King)) => assert_eq!(game.status(), Status::won_by(turn)),
            _ => assert_eq!(game.status(), Status::InProgress),
        }
    }

    if game.status().is_over() {
        assert_eq!(game.moves().next(), None);
    }
}

#[proptest]
fn undoing_every_move_restores_the_initial_game(
    #[strategy(1usize..64)] n: usize,
    selector: Selector,
) {
    let mut game = Game::new();

    for _ in 0..n {
        match selector.try_select(game.moves()) {
            Some(m) => game.make(m.whence(), m.whither())?,
            None => break,
        }
    }

    while game.undo() {}
    assert_eq!(game, Game::new());
}

#[test]
fn history_can_be_recorded_as_ron() -> Result<(), Anyhow> {
    let mut game = Game::new();
    game.make(pos("e2"), pos("e4"))?;
    game.make(pos("e7"), pos("e5"))?;

    let ron = to_string_pretty(game.history(), PrettyConfig::default())?;
    let snapshots: Vec<Snapshot> = ron::from_str(&ron)?;

    assert_eq!(snapshots.as_slice(), game.history().as_slice());
    assert_eq!(snapshots[0], Snapshot::new(Board::initial(), Color::White));
    assert_eq!(snapshots[2], Snapshot::new(*game.board(), Color::White));

    Ok(())
}

use crate::chess::{Bitboard, Board, Direction, Piece, Position, Role};

/// The eight jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// How far a piece may travel in a single [`Direction`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reach {
    /// Until the edge of the board or the first occupied square.
    Unbounded,
    /// At most this many squares.
    Limited(u8),
}

/// How a [`Piece`] generates the squares it may move to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Movement {
    /// Slides or steps along a set of directions, stopping at the first occupied square.
    Directional(&'static [Direction], Reach),
    /// Jumps to a fixed set of offsets, regardless of intervening pieces.
    Offsets(&'static [(i8, i8)]),
}

impl Movement {
    /// The movement profile of a [`Piece`] standing on a [`Position`].
    pub fn of(piece: Piece, whence: Position) -> Self {
        match piece.role() {
            Role::Rook => Movement::Directional(&Direction::ORTHOGONAL, Reach::Unbounded),
            Role::Bishop => Movement::Directional(&Direction::DIAGONAL, Reach::Unbounded),
            Role::Queen => Movement::Directional(&Direction::ALL, Reach::Unbounded),
            Role::King => Movement::Directional(&Direction::ALL, Reach::Limited(1)),
            Role::Knight => Movement::Offsets(&KNIGHT_OFFSETS),
            Role::Pawn => {
                let forward = piece.color().forward();

                if whence.y() == piece.color().pawn_row() {
                    Movement::Directional(forward, Reach::Limited(2))
                } else {
                    Movement::Directional(forward, Reach::Limited(1))
                }
            }
        }
    }

    /// The squares a [`Piece`] on a [`Position`] may move to on a [`Board`].
    ///
    /// Squares held by the mover's own side are never included, squares held by the opponent
    /// are capture candidates.
    pub fn targets(&self, board: &Board, whence: Position, piece: Piece) -> Bitboard {
        let own = board.occupied_by(piece.color());

        let candidates = match *self {
            Movement::Directional(directions, reach) => {
                let limit = match reach {
                    Reach::Unbounded => u8::MAX,
                    Reach::Limited(n) => n,
                };

                let mut bb = Bitboard::empty();
                for &d in directions {
                    let mut p = whence;
                    for _ in 0..limit {
                        match p.step(d) {
                            Err(_) => break,
                            Ok(q) if own.contains(q) => break,
                            Ok(q) => {
                                bb = bb.with(q);
                                if board[q].is_some() {
                                    break;
                                }

                                p = q;
                            }
                        }
                    }
                }

                bb
            }

            Movement::Offsets(offsets) => offsets
                .iter()
                .filter_map(|&(dx, dy)| whence.offset(dx, dy).ok())
                .collect(),
        };

        candidates & !own
    }
}

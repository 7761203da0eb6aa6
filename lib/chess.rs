mod bitboard;
mod board;
mod color;
mod direction;
mod game;
mod r#move;
mod movement;
mod piece;
mod position;
mod role;
mod snapshot;
mod status;

pub use bitboard::*;
pub use board::*;
pub use color::*;
pub use direction::*;
pub use game::*;
pub use movement::*;
pub use piece::*;
pub use position::*;
pub use r#move::*;
pub use role::*;
pub use snapshot::*;
pub use status::*;

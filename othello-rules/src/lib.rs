//! `othello-rules` is a small, dependable Othello (Reversi) rules engine.
//!
//! The package is organized in two levels:
//!
//!  - [`Board`] is the engine proper: a bordered mailbox grid that enumerates legal
//!    moves, applies captures and scores positions. Moves are not re-validated.
//!  - [`Game`] pairs a board with its [`PlayerRegistry`] and checks every move before
//!    applying it, reporting refusals as ordinary [`MoveOutcome`] values.
//!
//! Neither level tracks whose turn it is. The acting [`Color`] is an argument to
//! every move, and alternation (including passing when a color has no legal move)
//! belongs to the caller.

pub mod test_utils;

mod board;
mod direction;
mod game;
mod piece;
mod player;
mod position;
mod utils;

pub use board::*;
pub use direction::*;
pub use game::*;
pub use piece::*;
pub use player::*;
pub use position::*;

/// The number of playable spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on one edge of the bordered grid.
pub const GRID_LENGTH: usize = EDGE_LENGTH + 2;

/// The number of playable spaces on an Othello board.
pub const NUM_SPACES: usize = EDGE_LENGTH * EDGE_LENGTH;

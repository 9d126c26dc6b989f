//! `othello-referee` runs Othello matches on top of `othello-rules`.
//!
//! The rules engine answers "is this legal?" and "what does this move do?" for
//! whichever color the caller names. This crate owns the rest of the game flow:
//! it alternates colors starting from the configured first mover, records a pass
//! when the color to move has no legal move, and stops once neither color can
//! move. Moves come from [`Seat`]s; the referee never chooses one itself.

mod config;
mod error;
mod referee;
mod seat;

pub use config::MatchConfig;
pub use error::{ConfigError, RefereeError};
pub use referee::{MatchReport, Referee, Turn};
pub use seat::{FnSeat, ScriptedSeat, Seat};

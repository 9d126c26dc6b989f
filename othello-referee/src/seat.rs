//! Where moves come from.

use othello_rules::{Board, Color, ParsePositionError, Position, PositionList};
use std::collections::VecDeque;

/// A source of moves for one color, such as a scripted list or a caller's callback.
pub trait Seat {
    /// Name to register for this seat.
    fn name(&self) -> &str;

    /// Pick a move for `color`. `legal` is never empty when this is called.
    /// Returning None gives up the match.
    fn choose(&mut self, board: &Board, color: Color, legal: &PositionList) -> Option<Position>;
}

/// Plays a fixed sequence of positions, one per request.
#[derive(Clone, Debug)]
pub struct ScriptedSeat {
    name: String,
    script: VecDeque<Position>,
}

impl ScriptedSeat {
    pub fn new(name: impl Into<String>, script: impl IntoIterator<Item = Position>) -> Self {
        Self {
            name: name.into(),
            script: script.into_iter().collect(),
        }
    }

    /// Build from whitespace-separated notation ("D3 C5 F6").
    pub fn from_notation(
        name: impl Into<String>,
        notation: &str,
    ) -> Result<Self, ParsePositionError> {
        let script = notation
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Position>, _>>()?;
        Ok(Self::new(name, script))
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Seat for ScriptedSeat {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose(&mut self, _: &Board, _: Color, _: &PositionList) -> Option<Position> {
        self.script.pop_front()
    }
}

/// Adapts a closure into a [`Seat`].
pub struct FnSeat<F> {
    name: String,
    choose: F,
}

impl<F> FnSeat<F>
where
    F: FnMut(&Board, Color, &PositionList) -> Option<Position>,
{
    pub fn new(name: impl Into<String>, choose: F) -> Self {
        Self {
            name: name.into(),
            choose,
        }
    }
}

impl<F> Seat for FnSeat<F>
where
    F: FnMut(&Board, Color, &PositionList) -> Option<Position>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn choose(&mut self, board: &Board, color: Color, legal: &PositionList) -> Option<Position> {
        (self.choose)(board, color, legal)
    }
}

//! Implements game-level Othello logic.
//!
//! [`Game`] bundles a [`Board`] with its [`PlayerRegistry`] and validates moves
//! before applying them. It does not track whose turn it is: the caller names the
//! acting color on every call, and is responsible for alternation and passing.

use crate::board::{Board, Opening, Score, Verdict};
use crate::piece::{Cell, Color};
use crate::player::{Player, PlayerHandle, PlayerRegistry, RegistryError};
use crate::position::{Position, PositionList};
use derive_more::Display;
use std::fmt;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum InvalidMove {
    #[display(fmt = "({}, {}) is outside the board", row, col)]
    OutOfBounds { row: usize, col: usize },
    #[display(fmt = "{} is already occupied", _0)]
    Occupied(Position),
    #[display(fmt = "{} captures nothing", _0)]
    NoCapture(Position),
}

/// Final tally, attached to the move that ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub score: Score,
    pub verdict: Verdict,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.score, self.verdict)
    }
}

impl From<Score> for GameOver {
    fn from(score: Score) -> Self {
        Self {
            score,
            verdict: score.verdict(),
        }
    }
}

/// The result of [`Game::play_turn`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied.
    Accepted {
        flipped: PositionList,
        /// Set when neither color has a legal move left.
        game_over: Option<GameOver>,
    },
    /// The board is unchanged. `valid_positions` lists what the color could
    /// have played; an empty list means it has to pass.
    Rejected {
        reason: InvalidMove,
        valid_positions: PositionList,
    },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// The final tally, if this move ended the game.
    pub fn game_over(&self) -> Option<GameOver> {
        match self {
            MoveOutcome::Accepted { game_over, .. } => *game_over,
            MoveOutcome::Rejected { .. } => None,
        }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Accepted { .. } => f.write_str("Move completed."),
            MoveOutcome::Rejected {
                reason,
                valid_positions,
            } => write!(
                f,
                "Invalid move ({})\nHere are the valid moves: {}",
                reason, valid_positions
            ),
        }
    }
}

/// A game result with the winner's name resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    BlackWins(String),
    WhiteWins(String),
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::BlackWins(name) => write!(f, "Winner is black player: {}", name),
            Winner::WhiteWins(name) => write!(f, "Winner is white player: {}", name),
            Winner::Tie => f.write_str("It's a tie"),
        }
    }
}

/// A board plus the players seated at it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: PlayerRegistry,
}

impl Game {
    /// A game from the standard opening with no players yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opening(opening: Opening) -> Self {
        Self::from_board(Board::new(opening))
    }

    /// Continue from an arbitrary board.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            players: PlayerRegistry::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Seat a named player at `color`.
    pub fn create_player(
        &mut self,
        name: impl Into<String>,
        color: Color,
    ) -> Result<PlayerHandle, RegistryError> {
        self.players.create(name, color)
    }

    pub fn player(&self, handle: PlayerHandle) -> Option<&Player> {
        self.players.get(handle)
    }

    pub fn player_for(&self, color: Color) -> Option<&Player> {
        self.players.for_color(color)
    }

    /// Every position `color` may play, in row-major order.
    #[inline]
    pub fn available_positions(&self, color: Color) -> PositionList {
        self.board.available_positions(color)
    }

    /// Attempt a move, applying it only if it is legal for `color`.
    pub fn play_turn(&mut self, color: Color, pos: Position) -> MoveOutcome {
        let valid_positions = self.available_positions(color);
        if !valid_positions.contains(pos) {
            let reason = match self.board.cell(pos) {
                Cell::Empty => InvalidMove::NoCapture(pos),
                _ => InvalidMove::Occupied(pos),
            };
            return MoveOutcome::Rejected {
                reason,
                valid_positions,
            };
        }

        let flipped = self.board.flips(color, pos);
        self.board.apply_move(color, pos);

        let game_over = if self.board.is_terminal() {
            Some(GameOver::from(self.board.score()))
        } else {
            None
        };

        MoveOutcome::Accepted { flipped, game_over }
    }

    /// [`Game::play_turn`] from raw 1-indexed coordinates, which may lie off the board.
    pub fn play_turn_at(&mut self, color: Color, row: usize, col: usize) -> MoveOutcome {
        match Position::new(row, col) {
            Some(pos) => self.play_turn(color, pos),
            None => MoveOutcome::Rejected {
                reason: InvalidMove::OutOfBounds { row, col },
                valid_positions: self.available_positions(color),
            },
        }
    }

    /// Place a piece without checking legality. See [`Board::apply_move`].
    pub fn apply_move(&mut self, color: Color, pos: Position) -> &Board {
        self.board.apply_move(color, pos)
    }

    pub fn render_board(&self) -> String {
        self.board.render()
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Neither color can move.
    pub fn is_finished(&self) -> bool {
        self.board.is_terminal()
    }

    /// Resolve the current majority to a named winner.
    ///
    /// Meaningful once [`Game::is_finished`] holds; before that it reports the
    /// current leader. Fails only if the leading color has no registered player.
    pub fn winner(&self) -> Result<Winner, RegistryError> {
        let winner = match self.score().verdict() {
            Verdict::BlackWins => {
                Winner::BlackWins(self.players.require(Color::Black)?.name().to_string())
            }
            Verdict::WhiteWins => {
                Winner::WhiteWins(self.players.require(Color::White)?.name().to_string())
            }
            Verdict::Tie => Winner::Tie,
        };
        Ok(winner)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board.to_string())?;
        for player in self.players.iter() {
            writeln!(f, "{} ({})", player.name(), player.color())?;
        }
        Ok(())
    }
}

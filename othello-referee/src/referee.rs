//! The turn-order state machine that [`Game`] leaves to its caller.

use crate::config::MatchConfig;
use crate::error::RefereeError;
use crate::seat::Seat;
use derive_more::Display;
use othello_rules::{Board, Color, Game, GameOver, MoveOutcome, Position, Winner};
use std::fmt;

/// One step of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Turn {
    #[display(fmt = "{} plays {} ({} flipped)", color, position, flipped)]
    Moved {
        color: Color,
        position: Position,
        flipped: usize,
    },
    #[display(fmt = "{} passes", _0)]
    Passed(Color),
    #[display(fmt = "game over: {}", _0)]
    Finished(GameOver),
}

/// The record of a completed match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    /// Moves and passes in the order they happened.
    pub transcript: Vec<Turn>,
    pub game_over: GameOver,
    pub winner: Winner,
}

impl MatchReport {
    pub fn moves(&self) -> impl Iterator<Item = (Color, Position)> + '_ {
        self.transcript.iter().filter_map(|turn| match *turn {
            Turn::Moved {
                color, position, ..
            } => Some((color, position)),
            _ => None,
        })
    }

    pub fn passes(&self) -> impl Iterator<Item = Color> + '_ {
        self.transcript.iter().filter_map(|turn| match *turn {
            Turn::Passed(color) => Some(color),
            _ => None,
        })
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game is ended. {}", self.game_over.score)?;
        write!(f, "{}", self.winner)
    }
}

/// Drives a [`Game`] between two seats: alternates colors, passes a color with no
/// legal move, and stops once neither color can move.
pub struct Referee<'a> {
    config: MatchConfig,
    game: Game,
    black: Box<dyn Seat + 'a>,
    white: Box<dyn Seat + 'a>,
    to_move: Color,
    transcript: Vec<Turn>,
    finished: Option<GameOver>,
}

impl<'a> Referee<'a> {
    /// A match from the configured opening.
    pub fn new(
        config: MatchConfig,
        black: impl Seat + 'a,
        white: impl Seat + 'a,
    ) -> Result<Self, RefereeError> {
        let board = Board::new(config.opening);
        Self::from_board(config, board, black, white)
    }

    /// A match continuing from `board`. The configured opening is ignored.
    pub fn from_board(
        config: MatchConfig,
        board: Board,
        black: impl Seat + 'a,
        white: impl Seat + 'a,
    ) -> Result<Self, RefereeError> {
        config.validate()?;

        let mut game = Game::from_board(board);
        game.create_player(black.name(), Color::Black)?;
        game.create_player(white.name(), Color::White)?;

        Ok(Self {
            to_move: config.first_to_move,
            config,
            game,
            black: Box::new(black),
            white: Box::new(white),
            transcript: Vec::new(),
            finished: None,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The color the next [`Referee::step`] will ask for a move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Advance the match by one move or pass.
    pub fn step(&mut self) -> Result<Turn, RefereeError> {
        if let Some(game_over) = self.finished {
            return Ok(Turn::Finished(game_over));
        }
        if self.game.is_finished() {
            let game_over = GameOver::from(self.game.score());
            self.finished = Some(game_over);
            return Ok(Turn::Finished(game_over));
        }

        let color = self.to_move;
        let legal = self.game.available_positions(color);
        if legal.is_empty() {
            let turn = Turn::Passed(color);
            self.record(turn);
            self.to_move = !color;
            return Ok(turn);
        }

        let seat = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };

        let mut attempts = 0;
        loop {
            let position = seat
                .choose(self.game.board(), color, &legal)
                .ok_or(RefereeError::SeatResigned { color })?;

            match self.game.play_turn(color, position) {
                MoveOutcome::Accepted { flipped, game_over } => {
                    let turn = Turn::Moved {
                        color,
                        position,
                        flipped: flipped.len(),
                    };
                    self.finished = game_over;
                    self.to_move = !color;
                    self.record(turn);
                    return Ok(turn);
                }
                MoveOutcome::Rejected { reason, .. } => {
                    attempts += 1;
                    if attempts >= self.config.max_rejections {
                        return Err(RefereeError::TooManyRejections {
                            color,
                            attempts,
                            last: reason,
                        });
                    }
                }
            }
        }
    }

    fn record(&mut self, turn: Turn) {
        if self.config.echo_boards {
            eprintln!("{}\n{}", turn, self.game.board());
        }
        self.transcript.push(turn);
    }

    /// Step until neither color can move.
    pub fn run(&mut self) -> Result<MatchReport, RefereeError> {
        let game_over = loop {
            if let Turn::Finished(game_over) = self.step()? {
                break game_over;
            }
        };

        Ok(MatchReport {
            transcript: self.transcript.clone(),
            game_over,
            winner: self.game.winner()?,
        })
    }
}

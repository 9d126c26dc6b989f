//! The board engine: a bordered mailbox grid with legal-move enumeration,
//! capture application and scoring.
//!
//! The 8x8 playable area sits inside a one-cell [`Cell::Border`] frame, stored as a
//! flat array of `GRID_LENGTH * GRID_LENGTH` cells indexed by `row * GRID_LENGTH + col`.
//! Playable rows and columns are `1..=8`; 0 and 9 are border. A scan from any
//! playable cell along a [`Direction`] always stops on the frame before leaving
//! the array, so no bounds checks are needed while walking a line.

use crate::direction::Direction;
use crate::piece::{Cell, Color};
use crate::position::{Position, PositionList};
use crate::{utils, GRID_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// Number of cells in the bordered grid.
pub const GRID_SQUARES: usize = GRID_LENGTH * GRID_LENGTH;

/// Which color starts on the (4,4)-(5,5) diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Opening {
    /// White on (4,4) and (5,5), black on (4,5) and (5,4).
    Standard,
    /// Black on (4,4) and (5,5), white on (4,5) and (5,4).
    Swapped,
}

impl Default for Opening {
    fn default() -> Self {
        Self::Standard
    }
}

impl Opening {
    /// The color placed on the main diagonal of the center square.
    fn diagonal_color(self) -> Color {
        match self {
            Opening::Standard => Color::White,
            Opening::Swapped => Color::Black,
        }
    }
}

/// Piece counts for both colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

/// The color-level result of a scored board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Verdict {
    #[display(fmt = "black wins")]
    BlackWins,
    #[display(fmt = "white wins")]
    WhiteWins,
    #[display(fmt = "tie")]
    Tie,
}

impl Verdict {
    /// The winning color, or None on a tie.
    pub fn color(self) -> Option<Color> {
        match self {
            Verdict::BlackWins => Some(Color::Black),
            Verdict::WhiteWins => Some(Color::White),
            Verdict::Tie => None,
        }
    }
}

impl Score {
    /// The strictly larger count wins; equal counts tie.
    pub fn verdict(self) -> Verdict {
        use std::cmp::Ordering;
        match self.black.cmp(&self.white) {
            Ordering::Greater => Verdict::BlackWins,
            Ordering::Less => Verdict::WhiteWins,
            Ordering::Equal => Verdict::Tie,
        }
    }

    pub fn of(self, color: Color) -> u8 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "White pieces: {}, Black pieces: {}",
            self.white, self.black
        )
    }
}

/// The full bordered grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; GRID_SQUARES],
}

impl Default for Board {
    /// Gets the standard starting board.
    fn default() -> Self {
        Self::new(Opening::default())
    }
}

impl Board {
    /// A board with the given four-piece opening.
    pub fn new(opening: Opening) -> Self {
        let mut board = Self::framed();
        let diagonal = opening.diagonal_color();
        for &(row, col, color) in [
            (4, 4, diagonal),
            (5, 5, diagonal),
            (4, 5, !diagonal),
            (5, 4, !diagonal),
        ]
        .iter()
        {
            board.cells[row * GRID_LENGTH + col] = color.into();
        }
        board
    }

    /// Border frame around an empty playable area.
    fn framed() -> Self {
        let mut cells = [Cell::Empty; GRID_SQUARES];
        for (square, cell) in cells.iter_mut().enumerate() {
            if Position::from_square(square).is_none() {
                *cell = Cell::Border;
            }
        }
        Self { cells }
    }

    /// The cell at a playable position.
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.square()]
    }

    /// All cells of the bordered grid in row-major order, frame included.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Length of the opponent run that `color` would capture from `square` along
    /// `direction`, or 0 if that line is not closed by a `color` piece.
    fn capture_run(&self, color: Color, square: usize, direction: Direction) -> usize {
        let own = Cell::from(color);
        let opponent = Cell::from(!color);

        let mut cursor = step(square, direction);
        let mut run = 0;
        while self.cells[cursor] == opponent {
            run += 1;
            cursor = step(cursor, direction);
        }

        if run > 0 && self.cells[cursor] == own {
            run
        } else {
            0
        }
    }

    /// Returns whether `color` may place a piece at `pos`.
    pub fn is_legal(&self, color: Color, pos: Position) -> bool {
        let square = pos.square();
        self.cells[square] == Cell::Empty
            && Direction::ALL
                .iter()
                .any(|&direction| self.capture_run(color, square, direction) > 0)
    }

    /// Every position where `color` may place a piece, in row-major order.
    pub fn available_positions(&self, color: Color) -> PositionList {
        Position::all()
            .filter(|&pos| self.is_legal(color, pos))
            .collect()
    }

    /// The opponent pieces that placing `color` at `pos` would flip, grouped by
    /// direction in scan order. Does not check that `pos` is empty.
    pub fn flips(&self, color: Color, pos: Position) -> PositionList {
        let square = pos.square();
        let mut flipped = PositionList::default();
        for &direction in Direction::ALL.iter() {
            let mut cursor = square;
            for _ in 0..self.capture_run(color, square, direction) {
                cursor = step(cursor, direction);
                if let Some(captured) = Position::from_square(cursor) {
                    flipped.push(captured);
                }
            }
        }
        flipped
    }

    /// Place a `color` piece at `pos` and flip every sandwiched opponent run.
    ///
    /// Legality is not checked: `pos` should come from [`Board::available_positions`].
    pub fn apply_move(&mut self, color: Color, pos: Position) -> &Self {
        let flipped = self.flips(color, pos);
        self.cells[pos.square()] = color.into();
        for captured in flipped {
            self.cells[captured.square()] = color.into();
        }
        self
    }

    /// Count the pieces of one color.
    pub fn count(&self, color: Color) -> u8 {
        let target = Cell::from(color);
        self.cells.iter().filter(|&&cell| cell == target).count() as u8
    }

    /// Count the empty playable cells.
    pub fn count_empty(&self) -> u8 {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count() as u8
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.count(Color::Black),
            white: self.count(Color::White),
        }
    }

    /// Neither color has a legal move.
    pub fn is_terminal(&self) -> bool {
        Color::BOTH
            .iter()
            .all(|&color| self.available_positions(color).is_empty())
    }

    /// Text snapshot of the whole grid, border included.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

#[inline]
fn step(square: usize, direction: Direction) -> usize {
    (square as isize + direction.offset()) as usize
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::glyph), GRID_LENGTH, f)
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 or 100 cells, found {}", found)]
    WrongLength { found: usize },
    #[display(fmt = "unknown cell glyph '{}'", glyph)]
    UnknownGlyph { glyph: char },
    #[display(fmt = "border glyph missing or misplaced at grid index {}", square)]
    MisplacedBorder { square: usize },
}

/// Parse a board from its glyphs, whitespace ignored.
/// Accepts either the 64 playable cells or the full 100-cell bordered grid.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let mut board = Self::framed();

        match glyphs.len() {
            NUM_SPACES => {
                for (pos, &glyph) in Position::all().zip(glyphs.iter()) {
                    board.cells[pos.square()] = playable_cell(glyph)?;
                }
            }
            GRID_SQUARES => {
                for (square, &glyph) in glyphs.iter().enumerate() {
                    match Position::from_square(square) {
                        Some(pos) => board.cells[pos.square()] = playable_cell(glyph)?,
                        None if glyph == Cell::Border.glyph() => {}
                        None => return Err(ParseBoardError::MisplacedBorder { square }),
                    }
                }
            }
            found => return Err(ParseBoardError::WrongLength { found }),
        }

        Ok(board)
    }
}

fn playable_cell(glyph: char) -> Result<Cell, ParseBoardError> {
    match Cell::from_glyph(glyph) {
        Some(Cell::Border) | None => Err(ParseBoardError::UnknownGlyph { glyph }),
        Some(cell) => Ok(cell),
    }
}

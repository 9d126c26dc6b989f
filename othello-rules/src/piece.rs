//! The two piece colors and the contents of a single grid cell.

use derive_more::Display;
use std::fmt;

/// The color of a piece, and of the player who places it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
}

impl Default for Color {
    /// Gets the conventional first mover (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the opposing color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// Both colors, black first.
    pub const BOTH: [Color; 2] = [Color::Black, Color::White];
}

#[derive(Debug, PartialEq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color string")
    }
}

impl std::error::Error for ParseColorError {}

/// Parse a color from its name ("black", "white") or its board glyph ("X", "O").
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "x" => Ok(Color::Black),
            "white" | "o" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// The contents of one cell of the bordered grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    /// Sentinel frame around the playable area. Never placed or flipped.
    Border,
}

impl Cell {
    /// The glyph used when rendering or parsing a board.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Border => '*',
        }
    }

    /// Inverse of [`Cell::glyph`].
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Black),
            'O' => Some(Cell::White),
            '*' => Some(Cell::Border),
            _ => None,
        }
    }

    /// The color occupying this cell, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Border => None,
        }
    }
}

impl From<Color> for Cell {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

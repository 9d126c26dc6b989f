//! Code for working with [`Position`]s on the playable 8x8 area.

use crate::{EDGE_LENGTH, GRID_LENGTH};
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A placeable cell, addressed by 1-indexed row and column.
///
/// Ordering is row-major, which is also the order legal moves are reported in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    row: u8,
    col: u8,
}

/// An ordered list of positions, as returned by legal-move enumeration.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, From, Into)]
pub struct PositionList(Vec<Position>);

impl Position {
    /// Convert from row and column coordinates, both in `1..=8`.
    /// Returns None for anything outside the playable area, including the border.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if (1..=EDGE_LENGTH).contains(&row) && (1..=EDGE_LENGTH).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Index of this position in the flat bordered grid.
    #[inline]
    pub(crate) fn square(self) -> usize {
        self.row() * GRID_LENGTH + self.col()
    }

    /// Inverse of [`Position::square`]. Border squares have no position.
    #[inline]
    pub(crate) fn from_square(square: usize) -> Option<Self> {
        Self::new(square / GRID_LENGTH, square % GRID_LENGTH)
    }

    /// Every playable position, in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=EDGE_LENGTH).flat_map(|row| {
            (1..=EDGE_LENGTH).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

/// Convert this [`Position`] into string notation: column letter, then row ("D3" is row 3, column 4).
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col() - 1).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row() - 1).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        pos.to_coords()
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsePositionError;

impl Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid position string")
    }
}

impl std::error::Error for ParsePositionError {}

/// Build a [`Position`] from string notation ("D3", case-insensitive column).
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)? + 1;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as usize;

        if chars.next() != None {
            return Err(ParsePositionError);
        }

        Self::new(row, col).ok_or(ParsePositionError)
    }
}

impl PositionList {
    /// Returns whether `pos` is in this list.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.0
    }

    pub(crate) fn push(&mut self, pos: Position) {
        self.0.push(pos);
    }
}

impl IntoIterator for PositionList {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PositionList {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::iter::FromIterator<Position> for PositionList {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for PositionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

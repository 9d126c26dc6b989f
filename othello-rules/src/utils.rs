//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format `width * width` characters into a space-separated grid, one line per row.
/// `glyphs` must yield exactly that many items.
pub fn format_grid<T: Iterator<Item = char>>(
    mut glyphs: T,
    width: usize,
    f: &mut Formatter,
) -> fmt::Result {
    for _ in 0..width {
        for col in 0..width {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", glyphs.next().ok_or(fmt::Error)?)?;
        }
        writeln!(f)?;
    }

    match glyphs.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

//! Line width measurement with tab-stop alignment

use std::fmt;
use std::num::NonZeroUsize;

use crate::width::{TableWidth, WidthModel};

/// Tab size used when the host has none or reports a non-positive value
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Distance between tab stops, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabSize(NonZeroUsize);

impl TabSize {
    /// Create a tab size, `None` for zero
    pub fn new(size: usize) -> Option<TabSize> {
        NonZeroUsize::new(size).map(TabSize)
    }

    /// Normalize a host setting: absent or non-positive values become the default
    pub fn from_host(size: Option<i64>) -> TabSize {
        size.filter(|&n| n > 0)
            .and_then(|n| usize::try_from(n).ok())
            .and_then(TabSize::new)
            .unwrap_or_default()
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Next tab stop strictly after `column`
    pub fn next_stop(self, column: usize) -> usize {
        (column + 1).div_ceil(self.get()) * self.get()
    }
}

impl Default for TabSize {
    fn default() -> Self {
        TabSize::new(DEFAULT_TAB_SIZE).unwrap_or(TabSize(NonZeroUsize::MIN))
    }
}

impl From<NonZeroUsize> for TabSize {
    fn from(size: NonZeroUsize) -> Self {
        TabSize(size)
    }
}

impl fmt::Display for TabSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Running column state for a single line.
///
/// Both [`visual_width_with`] and [`find_exceeding_position_with`] advance
/// through this, so they always agree on where each character ends.
#[derive(Debug, Clone)]
pub struct ColumnCursor<M> {
    model: M,
    tab_size: TabSize,
    column: usize,
    width: usize,
}

impl<M: WidthModel> ColumnCursor<M> {
    pub fn new(tab_size: TabSize, model: M) -> Self {
        Self {
            model,
            tab_size,
            column: 0,
            width: 0,
        }
    }

    /// Advance over one character and return the cumulative width
    pub fn advance(&mut self, c: char) -> usize {
        if c == '\t' {
            let tab_stop = self.tab_size.next_stop(self.column);
            self.width += tab_stop - self.column;
            self.column = tab_stop;
        } else {
            let w = self.model.char_width(c);
            self.width += w;
            self.column += w;
        }
        self.width
    }

    /// Current column on the line
    pub fn column(&self) -> usize {
        self.column
    }

    /// Total width consumed so far
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Visual width of `text` using the default width table
///
/// # Example
/// ```
/// use dont_cross_line::{visual_width, TabSize};
///
/// let tab = TabSize::new(4).unwrap();
/// assert_eq!(visual_width("\tabc", tab), 7);
/// assert_eq!(visual_width("中文abc", tab), 7);
/// ```
pub fn visual_width(text: &str, tab_size: TabSize) -> usize {
    visual_width_with(text, tab_size, TableWidth)
}

/// Visual width of `text` under an explicit width model
pub fn visual_width_with<M: WidthModel>(text: &str, tab_size: TabSize, model: M) -> usize {
    let mut cursor = ColumnCursor::new(tab_size, model);
    for c in text.chars() {
        cursor.advance(c);
    }
    cursor.width()
}

/// Index of the first character whose processing pushes the width of `text`
/// strictly above `max_length`, using the default width table.
///
/// The index counts characters, not columns or bytes. Returns `None` when the
/// whole line fits, including when it is exactly `max_length` wide.
///
/// # Example
/// ```
/// use dont_cross_line::{find_exceeding_position, TabSize};
///
/// let tab = TabSize::default();
/// assert_eq!(find_exceeding_position("aaaaaaaaaa", 5, tab), Some(5));
/// assert_eq!(find_exceeding_position("aaaaa", 5, tab), None);
/// ```
pub fn find_exceeding_position(
    text: &str,
    max_length: usize,
    tab_size: TabSize,
) -> Option<usize> {
    find_exceeding_position_with(text, max_length, tab_size, TableWidth)
}

/// [`find_exceeding_position`] under an explicit width model
pub fn find_exceeding_position_with<M: WidthModel>(
    text: &str,
    max_length: usize,
    tab_size: TabSize,
    model: M,
) -> Option<usize> {
    let mut cursor = ColumnCursor::new(tab_size, model);
    text.chars().position(|c| cursor.advance(c) > max_length)
}

//! Per-character display width classification
//!
//! The default model is a small range table tuned for Japanese and emoji text.
//! It is deliberately not the full East-Asian-Width algorithm: anything outside
//! the listed ranges counts as one column. [`UnicodeWidth`] is available for
//! callers that want the Unicode data instead.

use unicode_width::UnicodeWidthChar;

/// Display cost of a single code point under the range table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidthClass {
    /// Occupies one column
    Narrow = 1,
    /// Occupies two columns
    Wide = 2,
}

impl WidthClass {
    /// Classify a code point. Ranges are checked in order, first match wins.
    pub fn of(c: char) -> WidthClass {
        match c as u32 {
            // ASCII
            0x0000..=0x007F => WidthClass::Narrow,
            // Half-width katakana
            0xFF61..=0xFF9F => WidthClass::Narrow,
            // Full-width ASCII and punctuation
            0xFF01..=0xFF5E => WidthClass::Wide,
            // Hiragana
            0x3040..=0x309F => WidthClass::Wide,
            // Katakana
            0x30A0..=0x30FF => WidthClass::Wide,
            // CJK Unified Ideographs
            0x4E00..=0x9FFF => WidthClass::Wide,
            // Emoji and other symbols (covers emoticons and transport)
            0x1F000..=0x1F9FF => WidthClass::Wide,
            // Miscellaneous symbols
            0x2600..=0x26FF => WidthClass::Wide,
            // Dingbats
            0x2700..=0x27BF => WidthClass::Wide,
            _ => WidthClass::Narrow,
        }
    }

    /// Number of columns this class occupies
    pub fn columns(self) -> usize {
        self as usize
    }
}

/// Column cost of a single code point under the range table (1 or 2)
pub fn char_width(c: char) -> usize {
    WidthClass::of(c).columns()
}

/// Column cost of one character unit.
///
/// Only the first code point of `unit` is inspected, so a multi-code-point
/// cluster is measured by its base character. An empty unit is 0.
pub fn width(unit: &str) -> usize {
    unit.chars().next().map_or(0, char_width)
}

/// A character width model used by the measuring functions
pub trait WidthModel {
    /// Columns occupied by `c`. Tabs never reach the model.
    fn char_width(&self, c: char) -> usize;
}

/// The range table model (default)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableWidth;

impl WidthModel for TableWidth {
    fn char_width(&self, c: char) -> usize {
        char_width(c)
    }
}

/// Unicode East-Asian-Width model backed by the `unicode-width` tables.
///
/// Control characters and zero-width code points (combining marks, ZWJ)
/// count as 0 columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeWidth;

impl WidthModel for UnicodeWidth {
    fn char_width(&self, c: char) -> usize {
        UnicodeWidthChar::width(c).unwrap_or(0)
    }
}

impl<M: WidthModel + ?Sized> WidthModel for &M {
    fn char_width(&self, c: char) -> usize {
        (**self).char_width(c)
    }
}

//! Display-width measurement.
//!
//! The wrapper never looks at byte lengths. Everything it knows about how
//! wide a line is comes from a [`DisplayWidth`] implementation, so callers
//! with a different notion of column width can plug their own in.

use unicode_width::UnicodeWidthChar;

/// Measures how many terminal columns text occupies.
pub trait DisplayWidth {
    /// Column width of a single code point.
    fn char_width(&self, c: char) -> usize;

    /// Column width of a string: the sum of its characters' widths.
    fn str_width(&self, s: &str) -> usize {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Column width of a run of already-decoded characters.
    fn chars_width(&self, chars: &[char]) -> usize {
        chars.iter().map(|&c| self.char_width(c)).sum()
    }
}

/// Standard terminal widths: 1 for ordinary characters, 2 for wide East
/// Asian characters, 0 for combining marks. Control characters have no
/// defined width and count as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeWidth;

impl DisplayWidth for UnicodeWidth {
    fn char_width(&self, c: char) -> usize {
        c.width().unwrap_or(0)
    }
}

/// Like [`UnicodeWidth`], but East Asian ambiguous characters (Greek,
/// Cyrillic, box drawing, ...) take two columns, as they do on most CJK
/// terminals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CjkWidth;

impl DisplayWidth for CjkWidth {
    fn char_width(&self, c: char) -> usize {
        c.width_cjk().unwrap_or(0)
    }
}

impl<F> DisplayWidth for F
where
    F: Fn(char) -> usize,
{
    fn char_width(&self, c: char) -> usize {
        self(c)
    }
}

pub fn char_width(c: char) -> usize {
    UnicodeWidth.char_width(c)
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidth.str_width(s)
}

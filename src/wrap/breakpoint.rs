use super::width::DisplayWidth;

/// A position where a line boundary may be placed.
///
/// Each variant carries the code point offset of the character that
/// triggered it. `start` is the exclusive end of the line before the break,
/// `end` is where the next line begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Whitespace. The whitespace character itself is dropped from the output.
    Space(usize),
    /// A literal `-`, kept at the end of the preceding line.
    Hyphen(usize),
    /// No separator was available; the break falls right after the character.
    Forced(usize),
}

impl Breakpoint {
    /// Offset of the character that produced this breakpoint.
    pub fn offset(&self) -> usize {
        match *self {
            Breakpoint::Space(at) | Breakpoint::Hyphen(at) | Breakpoint::Forced(at) => at,
        }
    }

    pub fn start(&self) -> usize {
        match *self {
            Breakpoint::Space(at) => at,
            Breakpoint::Hyphen(at) | Breakpoint::Forced(at) => at + 1,
        }
    }

    pub fn end(&self) -> usize {
        self.offset() + 1
    }

    /// Net change in width this break contributes to the line ending at it.
    /// Negative when characters are dropped, zero when nothing is.
    pub fn delta<W: DisplayWidth + ?Sized>(&self, text: &[char], measure: &W) -> isize {
        match *self {
            Breakpoint::Space(at) => {
                let width = text.get(at).map_or(0, |&c| measure.char_width(c));
                -(width as isize)
            }
            Breakpoint::Hyphen(_) | Breakpoint::Forced(_) => 0,
        }
    }

    /// The text consumed between `start` and `end`, if any.
    pub fn separator(&self, text: &[char]) -> Option<char> {
        match *self {
            Breakpoint::Space(at) => text.get(at).copied(),
            Breakpoint::Hyphen(_) | Breakpoint::Forced(_) => None,
        }
    }
}

//! Greedy word wrapping by display width.
//!
//! Lines break at the latest whitespace that still fits, then at hyphens,
//! and a word that cannot fit on its own is cut at a character boundary.
//!
//! # Example
//! ```
//! use wordwrap::wrap;
//!
//! let lines = wrap("we wrap at spaces", 9);
//! assert_eq!(lines, vec!["we wrap", "at spaces"]);
//! ```

pub mod breakpoint;
pub mod width;


pub use breakpoint::Breakpoint;
pub use width::{char_width, display_width, CjkWidth, DisplayWidth, UnicodeWidth};

const HYPHEN: char = '-';

/// Wrap `text` so that no line is wider than `limit` columns, using standard
/// terminal widths. A limit of zero or less disables wrapping.
pub fn wrap(text: &str, limit: i64) -> Vec<String> {
    Wrapper::new().wrap(text, limit)
}

/// Word wrapper parameterised over how display width is measured.
#[derive(Debug, Clone, Default)]
pub struct Wrapper<W = UnicodeWidth> {
    measure: W,
}

impl Wrapper<UnicodeWidth> {
    pub fn new() -> Self {
        Self {
            measure: UnicodeWidth,
        }
    }
}

impl<W: DisplayWidth> Wrapper<W> {
    pub fn with_measure(measure: W) -> Self {
        Self { measure }
    }

    pub fn wrap(&self, text: &str, limit: i64) -> Vec<String> {
        self.wrap_detailed(text, limit).into_lines()
    }

    /// Wrap `text` and keep the committed breakpoints next to the lines.
    pub fn wrap_detailed(&self, text: &str, limit: i64) -> Wrapped {
        if limit <= 0 {
            return Wrapped {
                lines: vec![text.to_string()],
                breaks: Vec::new(),
                separators: Vec::new(),
            };
        }

        let chars: Vec<char> = text.chars().collect();
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let breaks = self.breakpoints(&chars, limit);
        let lines = materialize(&chars, &breaks);
        let separators = breaks.iter().map(|bp| bp.separator(&chars)).collect();

        log::debug!(
            "wrapped {} chars at width {} into {} lines",
            chars.len(),
            limit,
            lines.len()
        );

        Wrapped {
            lines,
            breaks,
            separators,
        }
    }

    /// Scan `text` once and return the breakpoints to commit for `limit`.
    ///
    /// `limit` must be positive; every step consumes one character, so the
    /// scan is linear in the length of `text` whatever the limit.
    pub fn breakpoints(&self, text: &[char], limit: usize) -> Vec<Breakpoint> {
        let len = text.len();
        let mut committed = Vec::new();
        let mut current_len = 0usize;
        let mut candidate: Option<Breakpoint> = None;
        let mut previous: Option<Breakpoint> = None;
        let mut line_start = 0usize;

        'scan: for (i, &c) in text.iter().enumerate() {
            let width = self.measure.char_width(c);
            let is_space = c.is_whitespace();

            // The latest separator wins; the one it replaces is kept for a
            // hyphen that lands exactly on the limit.
            if is_space {
                previous = candidate.replace(Breakpoint::Space(i));
            } else if c == HYPHEN {
                previous = candidate.replace(Breakpoint::Hyphen(i));
            }

            current_len += width;
            let delta = candidate.map_or(0, |bp| bp.delta(text, &self.measure));
            // A wide whitespace candidate must not let the scanned text
            // itself run past the limit.
            if (current_len as isize) + delta < limit as isize && current_len <= limit {
                continue;
            }

            // Nothing follows and the last line fits as it is.
            if i + 1 == len && self.measure.chars_width(&text[line_start..]) <= limit {
                break;
            }

            let natural = match candidate {
                Some(Breakpoint::Hyphen(at)) if at == i => previous
                    .map(|earlier| vec![earlier, Breakpoint::Hyphen(at)])
                    .unwrap_or_default(),
                Some(bp) => vec![bp],
                None => Vec::new(),
            };

            let mut advanced = false;
            for bp in natural {
                if bp.end() == len {
                    break 'scan;
                }
                log::trace!("break {:?} at width {}", bp, current_len);
                committed.push(bp);
                line_start = bp.end();
                advanced = true;
            }

            // Whatever is still on the line must fit on its own.
            while line_start <= i {
                let carried = self.measure.chars_width(&text[line_start..=i]);
                if carried < limit {
                    break;
                }
                let bp = if carried > limit && line_start < i {
                    Breakpoint::Forced(i - 1)
                } else if c == HYPHEN {
                    Breakpoint::Hyphen(i)
                } else {
                    Breakpoint::Forced(i)
                };
                if bp.end() == len {
                    break 'scan;
                }
                log::trace!("break {:?} at width {}", bp, carried);
                committed.push(bp);
                line_start = bp.end();
                advanced = true;
            }

            if advanced {
                current_len = if line_start <= i {
                    self.measure.chars_width(&text[line_start..=i])
                } else if c == HYPHEN {
                    // a hyphen that closed the line still counts against the next one
                    width
                } else {
                    // a forced or whitespace break leaves nothing carried
                    0
                };
                candidate = None;
                previous = None;
            }
        }

        committed
    }
}

fn materialize(text: &[char], breaks: &[Breakpoint]) -> Vec<String> {
    if breaks.is_empty() {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![text.iter().collect()]
        };
    }

    let mut lines = Vec::with_capacity(breaks.len() + 1);
    let mut from = 0;
    for bp in breaks {
        lines.push(text[from..bp.start()].iter().collect());
        from = bp.end();
    }
    if from < text.len() {
        lines.push(text[from..].iter().collect());
    }
    lines
}

/// Lines produced by a wrap, together with the breaks that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped {
    lines: Vec<String>,
    breaks: Vec<Breakpoint>,
    separators: Vec<Option<char>>,
}

impl Wrapped {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Committed breakpoints, in text order.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breaks
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines back together, restoring each dropped separator.
    pub fn rejoin(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            out.push_str(line);
            if let Some(Some(sep)) = self.separators.get(i) {
                out.push(*sep);
            }
        }
        out
    }
}

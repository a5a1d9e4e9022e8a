//! The forward-iterating regexp search cursor.

use regex::{Captures, Regex, RegexBuilder};

use crate::{
    document::{Document, LineIter, LineStep},
    error::PatternError,
};

/// Options controlling how a search pattern is compiled.
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Whether to match without regard to letter case.
    ///
    /// # Default
    ///
    /// `false`
    pub ignore_case: bool,
}

/// One capturing group of a [`SearchMatch`], in absolute document offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    /// Absolute offset at which the group starts.
    pub from: usize,
    /// Absolute offset one past the group's end.
    pub to: usize,
    /// The text the group captured.
    pub text: String,
}

/// A single match reported by [`RegexpCursor`], in absolute document offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Absolute offset at which the match starts.
    pub from: usize,
    /// Absolute offset one past the match's end. Equal to `from` for a
    /// zero-width match, and never past the cursor's range end.
    pub to: usize,
    /// Capture groups, indexed as in the pattern. Group 0 is the whole match
    /// and is always present; later groups are `None` where they did not
    /// participate in the match.
    pub groups: Vec<Option<MatchGroup>>,
}

impl SearchMatch {
    /// The text of the whole match.
    #[must_use]
    pub fn text(&self) -> &str {
        self.groups
            .first()
            .and_then(Option::as_ref)
            .map_or("", |g| &g.text)
    }

    fn from_captures(line_start: usize, caps: &Captures<'_>) -> Self {
        let groups = caps
            .iter()
            .map(|group| {
                group.map(|m| MatchGroup {
                    from: line_start + m.start(),
                    to: line_start + m.end(),
                    text: m.as_str().to_owned(),
                })
            })
            .collect::<Vec<_>>();
        let (from, to) = groups
            .first()
            .and_then(Option::as_ref)
            .map_or((line_start, line_start), |g| (g.from, g.to));
        Self { from, to, groups }
    }
}

/// A forward search cursor yielding successive non-overlapping matches of a
/// regular expression inside a document range.
///
/// The cursor scans one line at a time and keeps its position between calls,
/// so pulling the next match never re-scans earlier content and never
/// materializes the document as one string. Matches come out strictly
/// ordered by start offset, in absolute document coordinates, and a
/// zero-width match never stalls the scan: the cursor always forces progress
/// past it.
///
/// Because every line is executed as an independent haystack, `^` and `$`
/// anchor to line boundaries, and a pattern that would need characters from
/// two different lines (for example a literal `\n`) can never match. That is
/// a limitation of this cursor variant, not of the documents it searches.
///
/// ```
/// use ropescan::{Document, RegexpCursor, SearchOptions, TextBuffer};
///
/// let doc = TextBuffer::from("read 10 bytes\nwrote 20 bytes");
/// let mut numbers = RegexpCursor::new(&doc, r"\d+", SearchOptions::default(), 0, doc.len())
///     .expect("pattern compiles");
/// assert_eq!(numbers.next().map(|m| (m.from, m.to)), Some((5, 7)));
/// assert_eq!(numbers.next().map(|m| (m.from, m.to)), Some((20, 22)));
/// assert_eq!(numbers.next(), None);
/// ```
pub struct RegexpCursor<'d, D: Document + 'd> {
    re: Regex,
    iter: D::Iter<'d>,
    /// Content of the current line, terminator excluded and truncated where
    /// the search range ends mid-line.
    cur_line: &'d str,
    /// Absolute offset at which `cur_line` begins.
    cur_line_start: usize,
    /// Absolute offset from which the next attempt starts. Never decreases.
    match_pos: usize,
    /// End of the search range.
    to: usize,
    /// End of the last emitted match. A zero-width match starting at or
    /// before this offset is a duplicate re-reported at a line boundary and
    /// is dropped.
    last_to: Option<usize>,
    done: bool,
}

impl<'d, D: Document> std::fmt::Debug for RegexpCursor<'d, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexpCursor")
            .field("re", &self.re)
            .field("cur_line", &self.cur_line)
            .field("cur_line_start", &self.cur_line_start)
            .field("match_pos", &self.match_pos)
            .field("to", &self.to)
            .field("last_to", &self.last_to)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<'d, D: Document> RegexpCursor<'d, D> {
    /// Create a cursor searching `doc` for `pattern` inside `[from, to)`.
    ///
    /// The caller must supply `0 <= from <= to <= doc.len()`, with both
    /// offsets on character boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when `pattern` is not a valid regular
    /// expression.
    pub fn new(
        doc: &'d D,
        pattern: &str,
        options: SearchOptions,
        from: usize,
        to: usize,
    ) -> Result<Self, PatternError> {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(options.ignore_case)
            .build()?;
        let mut cursor = Self {
            re,
            iter: doc.iter(),
            cur_line: "",
            cur_line_start: doc.line_start(from),
            match_pos: from,
            to,
            last_to: None,
            done: false,
        };
        let skip = cursor.cur_line_start;
        cursor.read_line(skip);
        Ok(cursor)
    }

    /// Whether the cursor has scanned past the end of its range.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Load the line beginning `skip` bytes past the iterator's position.
    fn read_line(&mut self, skip: usize) {
        match self.iter.next(skip) {
            LineStep::Chunk(text) => {
                self.cur_line = if self.cur_line_start + text.len() > self.to {
                    &text[..self.to - self.cur_line_start]
                } else {
                    text
                };
                // consume the terminator following the chunk
                self.iter.next(0);
            }
            LineStep::LineBreak | LineStep::Done => self.cur_line = "",
        }
    }

    fn next_line(&mut self) {
        self.cur_line_start += self.cur_line.len() + 1;
        if self.cur_line_start > self.to {
            self.cur_line = "";
        } else {
            self.read_line(0);
        }
    }

    fn step(&mut self) -> Option<SearchMatch> {
        if self.done {
            return None;
        }
        let mut off = self.match_pos - self.cur_line_start;
        loop {
            let caps = if self.match_pos <= self.to {
                self.re.captures_at(self.cur_line, off)
            } else {
                None
            };
            if let Some(caps) = caps {
                let hit = caps.get(0).expect("group 0 is the whole match");
                let from = self.cur_line_start + hit.start();
                let to = from + hit.len();
                self.match_pos = to;
                if from == to {
                    // force progress past a zero-width match; at the end of
                    // a line the next character is the one-byte terminator
                    self.match_pos += self.cur_line[hit.end()..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                }
                let accepted = from < to || self.last_to.is_none_or(|prev| from > prev);
                let value =
                    accepted.then(|| SearchMatch::from_captures(self.cur_line_start, &caps));
                if hit.start() == self.cur_line.len() {
                    // the match sits exactly at line end; set up the next
                    // line for the following attempt
                    self.next_line();
                }
                if let Some(value) = value {
                    self.last_to = Some(to);
                    return Some(value);
                }
                off = self.match_pos - self.cur_line_start;
            } else if self.cur_line_start + self.cur_line.len() < self.to {
                self.next_line();
                off = 0;
            } else {
                self.done = true;
                return None;
            }
        }
    }
}

impl<D: Document> Iterator for RegexpCursor<'_, D> {
    type Item = SearchMatch;

    fn next(&mut self) -> Option<SearchMatch> {
        self.step()
    }
}

impl<D: Document> std::iter::FusedIterator for RegexpCursor<'_, D> {}

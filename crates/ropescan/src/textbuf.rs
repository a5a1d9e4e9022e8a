//! A minimal line-chunked document.
//!
//! [`TextBuffer`] stores its text as one chunk per line and implements the
//! full [`Document`] contract, including the skip-then-yield iterator
//! protocol. It exists so the crate is usable and testable without a
//! production rope; anything beyond splitting on `\n` (balanced trees, piece
//! tables, mmap-backed chunks) is the business of the caller's own
//! [`Document`] implementation.

use crate::document::{DocVersion, Document, LineIter, LineStep};

/// An immutable in-memory document stored as line chunks.
///
/// Construction splits on `\n`; a terminator-final text ends with an empty
/// line, matching how editors count lines. Each buffer carries a fresh
/// [`DocVersion`], so an edited copy of a buffer is a distinct identity as
/// far as the window cache is concerned.
///
/// ```
/// use ropescan::{Document, TextBuffer};
///
/// let doc = TextBuffer::from("a\nbc");
/// assert_eq!(doc.len(), 4);
/// assert_eq!(doc.line_start(3), 2);
/// assert_eq!(doc.slice(0, 3), "a\nb");
/// ```
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    len: usize,
    version: DocVersion,
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
            len: text.len(),
            version: DocVersion::fresh(),
        }
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl Document for TextBuffer {
    type Iter<'a>
        = TextBufferIter<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn version(&self) -> DocVersion {
        self.version
    }

    fn line_start(&self, offset: usize) -> usize {
        let mut start = 0;
        for line in &self.lines {
            let end = start + line.len();
            if offset <= end {
                return start;
            }
            start = end + 1;
        }
        start
    }

    fn slice(&self, from: usize, to: usize) -> String {
        let mut out = String::with_capacity(to - from);
        let mut start = 0;
        for (i, line) in self.lines.iter().enumerate() {
            if start >= to {
                break;
            }
            let end = start + line.len();
            if from < end && start < to {
                let lo = from.max(start) - start;
                let hi = to.min(end) - start;
                out.push_str(&line[lo..hi]);
            }
            // the terminator occupies [end, end + 1)
            if i + 1 < self.lines.len() && from <= end && end < to {
                out.push('\n');
            }
            start = end + 1;
        }
        out
    }

    fn iter(&self) -> TextBufferIter<'_> {
        TextBufferIter {
            lines: &self.lines,
            line: 0,
            col: 0,
        }
    }
}

/// Forward iterator over a [`TextBuffer`]'s line chunks.
#[derive(Debug)]
pub struct TextBufferIter<'d> {
    lines: &'d [String],
    line: usize,
    /// Byte offset within the current line; equal to the line's length when
    /// the iterator sits on its terminator.
    col: usize,
}

impl TextBufferIter<'_> {
    fn advance(&mut self, mut skip: usize) {
        while skip > 0 {
            let line_len = self.lines[self.line].len();
            let rest = line_len - self.col;
            if skip <= rest {
                self.col += skip;
                return;
            }
            skip -= rest;
            self.col = line_len;
            if self.line + 1 < self.lines.len() {
                // crossing the terminator costs one byte
                skip -= 1;
                self.line += 1;
                self.col = 0;
            } else {
                return;
            }
        }
    }
}

impl<'d> LineIter<'d> for TextBufferIter<'d> {
    fn next(&mut self, skip: usize) -> LineStep<'d> {
        self.advance(skip);
        let text = self.lines[self.line].as_str();
        if self.col >= text.len() {
            if self.line + 1 < self.lines.len() {
                self.line += 1;
                self.col = 0;
                return LineStep::LineBreak;
            }
            return LineStep::Done;
        }
        let chunk = &text[self.col..];
        self.col = text.len();
        LineStep::Chunk(chunk)
    }
}

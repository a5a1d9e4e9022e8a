//! The document abstraction consumed by the search cursor and window cache.
//!
//! A document is an immutable, chunk-structured character sequence: it can
//! report its length, locate the line containing an offset, extract a
//! substring, and iterate forward line by line, all without ever exposing the
//! full text as one contiguous string. All offsets are byte offsets and must
//! lie on UTF-8 character boundaries.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identity token for one immutable document snapshot.
///
/// The window cache keys its entries by this token. Two snapshots of the
/// "same" logical document (say, before and after an edit) must carry
/// distinct tokens, otherwise a cached window of the old snapshot could leak
/// into reads of the new one. [`DocVersion::fresh`] mints a token that no
/// other snapshot in the process has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocVersion(u64);

impl DocVersion {
    /// Mint a token distinct from every other token minted in this process.
    #[must_use]
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// One step of forward iteration over a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStep<'d> {
    /// Content of one line, terminator excluded. When iteration starts in
    /// the middle of a line, the chunk covers the rest of that line.
    Chunk(&'d str),
    /// A line terminator. Yielded instead of a chunk when the iterator sits
    /// directly on a `\n`; consuming it moves to the start of the next line.
    LineBreak,
    /// The end of the document.
    Done,
}

/// Forward iterator over a document's line chunks.
///
/// Unlike [`Iterator`], `next` takes a skip count: the iterator first
/// advances past `skip` bytes (line breaks included) and then yields the next
/// piece. This is what lets a caller jump to an arbitrary line start without
/// touching the chunks in between.
pub trait LineIter<'d> {
    /// Advance past `skip` bytes, then yield the next piece of the document.
    fn next(&mut self, skip: usize) -> LineStep<'d>;
}

/// An immutable, chunk-structured text document.
///
/// Lines are separated by `\n`, which counts one byte toward offsets. All
/// offset arguments are preconditions, not checked errors: callers must pass
/// offsets within `0..=len()` that lie on character boundaries, and
/// violations may panic.
pub trait Document {
    /// Iterator type returned by [`Document::iter`].
    type Iter<'a>: LineIter<'a>
    where
        Self: 'a;

    /// Total length of the document in bytes.
    fn len(&self) -> usize;

    /// Whether the document is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The identity token of this snapshot.
    fn version(&self) -> DocVersion;

    /// Absolute start offset of the line containing `offset`.
    ///
    /// An offset sitting on a line's terminator belongs to the line that the
    /// terminator ends.
    fn line_start(&self, offset: usize) -> usize;

    /// Materialize the document's content over `[from, to)`.
    fn slice(&self, from: usize, to: usize) -> String;

    /// A forward iterator positioned at offset 0.
    fn iter(&self) -> Self::Iter<'_>;
}

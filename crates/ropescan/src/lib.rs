//! Incremental regular-expression search over chunked text documents.
//!
//! The crate provides two independent pieces serving the same search use
//! case:
//!
//! - [`RegexpCursor`], a forward search cursor that scans a bounded offset
//!   range of a [`Document`] line by line, yielding successive
//!   non-overlapping matches (with capture groups) in absolute document
//!   offsets. The document is never materialized as one string, and no call
//!   re-scans from the start of the range.
//! - [`FlattenCache`], a memoization helper that materializes contiguous
//!   substring windows of a document on demand, extending the most recently
//!   cached window instead of re-extracting when requests overlap or abut it.
//!
//! Documents are abstract: anything implementing [`Document`] can be
//! searched. [`TextBuffer`] is a minimal line-chunked implementation suitable
//! for tests and small callers; production ropes plug in behind the same
//! trait.
//!
//! ```
//! use ropescan::{Document, RegexpCursor, SearchOptions, TextBuffer};
//!
//! let doc = TextBuffer::from("one match\nanother match\n");
//! let cursor = RegexpCursor::new(&doc, r"match", SearchOptions::default(), 0, doc.len())
//!     .expect("pattern compiles");
//! let spans: Vec<_> = cursor.map(|m| (m.from, m.to)).collect();
//! assert_eq!(spans, [(4, 9), (18, 23)]);
//! ```
//!
//! Patterns are executed one line at a time, so `^` and `$` anchor to line
//! boundaries and a pattern that needs characters from two different lines
//! never matches. See [`RegexpCursor`] for details.

mod cursor;
mod document;
mod error;
mod flatten;
mod textbuf;

#[cfg(test)]
mod tests;

pub use cursor::{MatchGroup, RegexpCursor, SearchMatch, SearchOptions};
pub use document::{DocVersion, Document, LineIter, LineStep};
pub use error::PatternError;
pub use flatten::FlattenCache;
pub use textbuf::{TextBuffer, TextBufferIter};

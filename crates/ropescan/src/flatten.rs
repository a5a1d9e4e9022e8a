//! Memoized extraction of contiguous document windows.

use std::collections::HashMap;

use crate::document::{DocVersion, Document};

/// A materialized window `[from, from + text.len())` of one document.
#[derive(Debug, Clone)]
struct FlattenedDoc {
    from: usize,
    text: String,
}

impl FlattenedDoc {
    fn to(&self) -> usize {
        self.from + self.text.len()
    }
}

/// Memoizes the most recently flattened window of each document.
///
/// The cache keeps at most one window per [`DocVersion`]. A request that
/// overlaps or touches the cached window extends it with only the missing
/// prefix and/or suffix; an exact repeat returns the cached text without
/// touching the document; anything else replaces the window wholesale. The
/// returned text is always exactly the document's content over the requested
/// range, whatever was cached before; losing an entry costs a re-extraction,
/// never correctness.
///
/// The cache stores only the version token and the window text, never a
/// reference to the document itself. Entries are dropped explicitly: call
/// [`evict`](FlattenCache::evict) when a snapshot is superseded, or
/// [`clear`](FlattenCache::clear) to drop everything. Not safe for concurrent
/// mutation; confine it to one thread or guard it externally.
///
/// ```
/// use ropescan::{FlattenCache, TextBuffer};
///
/// let doc = TextBuffer::from("chunked documents\nflattened on demand\n");
/// let mut cache = FlattenCache::new();
/// assert_eq!(cache.get(&doc, 0, 7), "chunked");
/// // touching request: only [7, 17) is extracted, the window grows to [0, 17)
/// assert_eq!(cache.get(&doc, 7, 17), " documents");
/// ```
#[derive(Debug, Default)]
pub struct FlattenCache {
    windows: HashMap<DocVersion, FlattenedDoc>,
}

impl FlattenCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the document's content over `[from, to)`.
    ///
    /// The caller must supply `0 <= from <= to <= doc.len()`, with both
    /// offsets on character boundaries.
    pub fn get<D: Document>(&mut self, doc: &D, from: usize, to: usize) -> &str {
        let key = doc.version();
        let window = match self.windows.remove(&key) {
            Some(cached) if cached.from <= to && from <= cached.to() => {
                if cached.from == from && cached.to() == to {
                    cached
                } else {
                    let cached_to = cached.to();
                    let mut text = cached.text;
                    let mut start = cached.from;
                    if from < start {
                        let mut prefix = doc.slice(from, start);
                        prefix.push_str(&text);
                        text = prefix;
                        start = from;
                    }
                    if cached_to < to {
                        text.push_str(&doc.slice(cached_to, to));
                    }
                    FlattenedDoc { from: start, text }
                }
            }
            // no window, or one disjoint from the request
            _ => FlattenedDoc {
                from,
                text: doc.slice(from, to),
            },
        };
        let window = self.windows.entry(key).or_insert(window);
        &window.text[from - window.from..to - window.from]
    }

    /// Drop the window cached for `version`, if any.
    ///
    /// Call this when the snapshot carrying `version` is superseded; nothing
    /// is reclaimed automatically.
    pub fn evict(&mut self, version: DocVersion) {
        self.windows.remove(&version);
    }

    /// Drop every cached window.
    pub fn clear(&mut self) {
        self.windows.clear();
    }
}

use quickcheck_macros::quickcheck;

use crate::{Document, FlattenCache, LineIter, LineStep, RegexpCursor, SearchOptions, TextBuffer};

/// Pattern pool covering literals, zero-width-capable repetition, anchors,
/// classes, and alternation.
const PATTERNS: &[&str] = &["a", "", "^", "$", r"\w+", "[0-9]+", "x*", "ab|b"];

/// Clamp `at` into the text and back onto a character boundary. Monotonic,
/// so clamping both ends of a range preserves its orientation.
fn boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

fn range(text: &str, a: usize, b: usize) -> (usize, usize) {
    (boundary(text, a.min(b)), boundary(text, a.max(b)))
}

#[quickcheck]
fn matches_are_ordered_bounded_and_finite(text: String, pattern: usize, a: usize, b: usize) -> bool {
    let pattern = PATTERNS[pattern % PATTERNS.len()];
    let (from, to) = range(&text, a, b);
    let doc = TextBuffer::from(text.as_str());
    let cursor = RegexpCursor::new(&doc, pattern, SearchOptions::default(), from, to)
        .expect("valid pattern");

    let mut emitted = 0usize;
    let mut prev_from = None;
    for m in cursor {
        emitted += 1;
        if emitted > to - from + 1 {
            return false;
        }
        if m.from < from || m.to > to || m.to < m.from {
            return false;
        }
        if prev_from.is_some_and(|p| m.from <= p) {
            return false;
        }
        let matched = doc.slice(m.from, m.to);
        if matched.contains('\n') || matched != m.text() {
            return false;
        }
        prev_from = Some(m.from);
    }
    true
}

#[quickcheck]
fn literal_matches_agree_with_str_search(text: String, a: usize, b: usize) -> bool {
    let (from, to) = range(&text, a, b);
    let doc = TextBuffer::from(text.as_str());
    let got: Vec<_> = RegexpCursor::new(&doc, "a", SearchOptions::default(), from, to)
        .expect("valid pattern")
        .map(|m| (m.from, m.to))
        .collect();
    let want: Vec<_> = text[from..to]
        .match_indices('a')
        .map(|(i, hit)| (from + i, from + i + hit.len()))
        .collect();
    got == want
}

#[quickcheck]
fn cache_always_returns_exact_document_content(text: String, requests: Vec<(usize, usize)>) -> bool {
    let doc = TextBuffer::from(text.as_str());
    let mut cache = FlattenCache::new();
    for (a, b) in requests {
        let (from, to) = range(&text, a, b);
        if cache.get(&doc, from, to) != doc.slice(from, to) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn text_buffer_round_trips_through_its_iterator(text: String) -> bool {
    let doc = TextBuffer::from(text.as_str());
    let mut iter = doc.iter();
    let mut rebuilt = String::new();
    loop {
        match iter.next(0) {
            LineStep::Chunk(chunk) => rebuilt.push_str(chunk),
            LineStep::LineBreak => rebuilt.push('\n'),
            LineStep::Done => break,
        }
    }
    rebuilt == text
}

#[quickcheck]
fn line_start_and_slice_agree_with_a_reference(text: String, at: usize) -> bool {
    let at = boundary(&text, at);
    let doc = TextBuffer::from(text.as_str());
    let want = text[..at].rfind('\n').map_or(0, |i| i + 1);
    doc.line_start(at) == want
        && doc.slice(0, at) == text[..at]
        && doc.slice(at, text.len()) == text[at..]
}

#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ropescan::{Document, FlattenCache, RegexpCursor, SearchOptions, TextBuffer};

/// Pattern pool covering the interesting shapes: literals, zero-width-capable
/// repetition, anchors, classes, alternation, and optional captures.
static PATTERNS: &[&str] = &["a", "", "^", "$", "x*", "[0-9]+", r"\w+", "(a)(b)?", "ab|ba"];

#[derive(Arbitrary, Debug)]
struct Scan {
    text: String,
    pattern: u8,
    from: usize,
    to: usize,
    ignore_case: bool,
}

/// Clamp `at` into the text and back onto a character boundary, so the scan
/// range is always a valid precondition regardless of the raw input.
fn boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

fuzz_target!(|scan: Scan| {
    let pattern = PATTERNS[scan.pattern as usize % PATTERNS.len()];
    let from = boundary(&scan.text, scan.from.min(scan.to));
    let to = boundary(&scan.text, scan.from.max(scan.to));
    let doc = TextBuffer::from(scan.text.as_str());
    let options = SearchOptions {
        ignore_case: scan.ignore_case,
    };
    let cursor = RegexpCursor::new(&doc, pattern, options, from, to).expect("pattern compiles");

    let mut emitted = 0usize;
    let mut prev_from = None;
    for m in cursor {
        emitted += 1;
        assert!(emitted <= to - from + 1, "cursor failed to terminate");
        assert!(from <= m.from && m.from <= m.to && m.to <= to, "match out of range");
        assert!(
            prev_from.is_none_or(|p| m.from > p),
            "matches not strictly ordered"
        );
        let matched = doc.slice(m.from, m.to);
        assert!(!matched.contains('\n'), "match crosses a line break");
        assert_eq!(matched, m.text());
        prev_from = Some(m.from);
    }

    let mut cache = FlattenCache::new();
    assert_eq!(cache.get(&doc, from, to), doc.slice(from, to));
});

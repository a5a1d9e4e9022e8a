use crate::{Document, LineIter, LineStep, TextBuffer};

#[test]
fn length_counts_terminators() {
    assert_eq!(TextBuffer::from("").len(), 0);
    assert_eq!(TextBuffer::from("ab\ncd").len(), 5);
    assert_eq!(TextBuffer::from("ab\n").len(), 3);
}

#[test]
fn line_start_locates_the_containing_line() {
    let doc = TextBuffer::from("ab\ncd");
    assert_eq!(doc.line_start(0), 0);
    assert_eq!(doc.line_start(1), 0);
    // the terminator belongs to the line it ends
    assert_eq!(doc.line_start(2), 0);
    assert_eq!(doc.line_start(3), 3);
    assert_eq!(doc.line_start(5), 3);
}

#[test]
fn line_start_on_empty_lines() {
    let doc = TextBuffer::from("a\n\nb");
    assert_eq!(doc.line_start(2), 2);
    assert_eq!(doc.line_start(3), 3);
}

#[test]
fn slice_crosses_line_breaks() {
    let doc = TextBuffer::from("ab\ncd\nef");
    assert_eq!(doc.slice(0, 8), "ab\ncd\nef");
    assert_eq!(doc.slice(1, 4), "b\nc");
    assert_eq!(doc.slice(2, 3), "\n");
    assert_eq!(doc.slice(4, 4), "");
}

#[test]
fn iter_alternates_chunks_and_breaks() {
    let doc = TextBuffer::from("ab\n\ncd");
    let mut iter = doc.iter();
    assert_eq!(iter.next(0), LineStep::Chunk("ab"));
    assert_eq!(iter.next(0), LineStep::LineBreak);
    // the empty line is represented by its terminator alone
    assert_eq!(iter.next(0), LineStep::LineBreak);
    assert_eq!(iter.next(0), LineStep::Chunk("cd"));
    assert_eq!(iter.next(0), LineStep::Done);
    assert_eq!(iter.next(0), LineStep::Done);
}

#[test]
fn iter_skip_lands_mid_line() {
    let doc = TextBuffer::from("hello\nworld");
    let mut iter = doc.iter();
    assert_eq!(iter.next(8), LineStep::Chunk("rld"));
    assert_eq!(iter.next(0), LineStep::Done);
}

#[test]
fn iter_skip_lands_on_a_break() {
    let doc = TextBuffer::from("hello\nworld");
    let mut iter = doc.iter();
    assert_eq!(iter.next(5), LineStep::LineBreak);
    assert_eq!(iter.next(0), LineStep::Chunk("world"));
}

#[test]
fn iter_on_empty_document() {
    let doc = TextBuffer::from("");
    let mut iter = doc.iter();
    assert_eq!(iter.next(0), LineStep::Done);
}

#[test]
fn iter_skip_past_the_end_is_clamped() {
    let doc = TextBuffer::from("ab");
    let mut iter = doc.iter();
    assert_eq!(iter.next(10), LineStep::Done);
}

//! Basic tests for wordscan-api

use std::sync::Arc;
use wordscan_api::*;

#[test]
fn test_walk_text_convenience() {
    let output = walk_text("One. Two.");

    assert_eq!(output.char_offsets(), vec![3, 5, 8, 9]);
    assert_eq!(output.metadata.total_bytes, 9);
    assert_eq!(output.metadata.total_chars, 9);
    assert_eq!(output.metadata.boundary_count, 4);
    assert_eq!(output.metadata.direction, Direction::Forward);
    assert!(!output.metadata.truncated);
    assert!(output.metadata.processing_time_ms < 60_000);
}

#[test]
fn test_walk_backward() {
    let walker = BoundaryWalker::with_config(Config::backward());
    let output = walker.walk_text("One. Two.");

    assert_eq!(output.char_offsets(), vec![8, 5, 3, 0]);
    assert_eq!(output.metadata.start, 9);
    assert!(output
        .boundaries
        .iter()
        .all(|b| b.direction == Direction::Backward));
}

#[test]
fn test_walk_reports_byte_offsets() {
    let output = walk_text("héllo wörld");

    let pairs: Vec<(usize, usize)> = output
        .boundaries
        .iter()
        .map(|b| (b.char_offset, b.byte_offset))
        .collect();
    assert_eq!(pairs, vec![(6, 7), (11, 13)]);
}

#[test]
fn test_walk_with_start_and_limit() {
    let config = Config::builder().start(4).limit(Some(2)).build().unwrap();
    let output = BoundaryWalker::with_config(config).walk_text("a b c d e");

    assert_eq!(output.char_offsets(), vec![6, 8]);
    assert!(output.metadata.truncated);
}

#[test]
fn test_limit_equal_to_count_is_not_truncated() {
    let config = Config::builder().limit(Some(2)).build().unwrap();
    let output = BoundaryWalker::with_config(config).walk_text("a b");

    assert_eq!(output.char_offsets(), vec![2, 3]);
    assert!(!output.metadata.truncated);
}

#[test]
fn test_walk_past_end_is_empty() {
    let config = Config::builder().start(50).build().unwrap();
    let output = BoundaryWalker::with_config(config).walk_text("short");
    assert!(output.is_empty());

    let config = Config::builder().backward().start(50).build().unwrap();
    let output = BoundaryWalker::with_config(config).walk_text("short");
    assert!(output.is_empty());
}

#[test]
fn test_walk_empty_text() {
    assert!(walk_text("").is_empty());
    assert!(BoundaryWalker::with_config(Config::backward())
        .walk_text("")
        .is_empty());
}

#[test]
fn test_walk_input_sources() {
    let walker = BoundaryWalker::new();
    let output = walker.walk(Input::from_bytes(b"word".to_vec())).unwrap();
    assert_eq!(output.char_offsets(), vec![4]);

    let result = walker.walk(Input::from_bytes(vec![0xff]));
    assert!(matches!(result, Err(ApiError::Utf8(_))));
}

#[test]
fn test_walk_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.txt");
    std::fs::write(&path, "One.Two.").unwrap();

    let output = walk_file(&path).unwrap();
    assert_eq!(output.char_offsets(), vec![3, 4, 7, 8]);
}

/// Tokenizer that never makes progress
struct StuckTokenizer;

impl WordTokenizer for StuckTokenizer {
    fn is_word_continuation(&self, _existing: &str, _next: char) -> bool {
        false
    }

    fn next_word_boundary(&self, _text: &Text, index: usize) -> Option<usize> {
        Some(index)
    }

    fn previous_word_boundary(&self, _text: &Text, index: usize) -> Option<usize> {
        Some(index)
    }
}

#[test]
fn test_walk_stops_on_stuck_tokenizer() {
    let walker = BoundaryWalker::with_tokenizer(Arc::new(StuckTokenizer), Config::forward());
    assert!(walker.walk_text("never ends").is_empty());
}

#[test]
fn test_checked_entry_points() {
    assert_eq!(check_next_word_boundary(Some("word"), 1).unwrap(), Some(4));
    assert_eq!(
        check_previous_word_boundary(Some("One. Two."), 9).unwrap(),
        Some(8)
    );
    assert!(check_word_continuation(Some("a"), 'a').unwrap());
    assert!(check_word_continuation(None, 'a').is_err());
}

#[test]
fn test_tokenizer_over_text_buffer() {
    let text = Text::new("One.Two ");
    let tokenizer = SimpleWordTokenizer::new();

    let boundary = tokenizer.previous_word_boundary(&text, 8).unwrap();
    assert_eq!(boundary, 4);
    assert_eq!(text.slice_from(boundary), Some("Two "));
}

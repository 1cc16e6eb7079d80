//! Word boundary scanning for interactive text navigation
//!
//! This crate answers three questions about a run of text: where the next
//! word boundary after a cursor lies, where the previous one lies, and
//! whether appending a character continues the word being typed. It is a
//! fast, approximate tokenizer meant for "jump to next word" style cursor
//! movement, not a linguistically accurate segmenter.
//!
//! Characters are classified through the Unicode General Category tables
//! into letters, punctuation, whitespace and everything else. Punctuation
//! is always a boundary of its own; runs of letters (and digits, symbols)
//! only end at a separator.
//!
//! All indices are char indices into a `&[char]`. A result of `None` means
//! no boundary exists in the scanned direction.
//!
//! # Example
//!
//! ```rust
//! use wordscan_core::{next_word_boundary, previous_word_boundary};
//!
//! let text: Vec<char> = "One. Two.".chars().collect();
//!
//! assert_eq!(next_word_boundary(&text, 3), Some(5));
//! assert_eq!(previous_word_boundary(&text, 9), Some(8));
//! assert_eq!(next_word_boundary(&text, 9), None);
//! ```

#![warn(missing_docs)]

pub mod class;
pub mod scan;

pub use class::{is_letter, is_punctuation, is_whitespace, CharClass};
pub use scan::{
    backward_boundaries, forward_boundaries, is_word_continuation, next_word_boundary,
    previous_word_boundary, BackwardBoundaries, ForwardBoundaries,
};

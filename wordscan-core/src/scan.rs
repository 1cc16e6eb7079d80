//! Forward and backward word boundary scans
//!
//! Both scans are pure functions over a char slice. They never allocate and
//! run in time linear to the distance walked.

use crate::class::{is_letter, CharClass};
use core::iter::FusedIterator;

/// Check whether appending `next` to `existing` would extend the same word.
///
/// True only when `next` is a letter and `existing` ends in a letter.
pub fn is_word_continuation(existing: &str, next: char) -> bool {
    if !is_letter(next) {
        return false;
    }

    existing.chars().next_back().is_some_and(is_letter)
}

/// Find the first word boundary strictly after `index`.
///
/// Returns `None` when `index` is at or past the end of `text`. When the
/// scan runs off the end without finding a boundary, the end of the text
/// (`text.len()`) is the boundary.
pub fn next_word_boundary(text: &[char], index: usize) -> Option<usize> {
    let start = *text.get(index)?;

    // Set once a separator has been crossed; the next word char is a boundary
    let mut return_after_separator = CharClass::of(start).is_separator();

    for (position, &ch) in text.iter().enumerate().skip(index + 1) {
        match CharClass::of(ch) {
            CharClass::Punctuation => return Some(position),
            CharClass::Whitespace => return_after_separator = true,
            _ if return_after_separator => return Some(position),
            _ => {}
        }
    }

    Some(text.len())
}

/// Find the first word boundary strictly before `index`.
///
/// Returns `None` when `index` is zero or points past the end of `text`.
/// When the scan reaches the start of the text, `0` is the boundary.
pub fn previous_word_boundary(text: &[char], index: usize) -> Option<usize> {
    let behind = index.checked_sub(1)?;
    let class = CharClass::of(*text.get(behind)?);

    // Punctuation directly behind the cursor is always the boundary
    if class == CharClass::Punctuation {
        return Some(behind);
    }

    let mut has_character = class != CharClass::Whitespace;
    let initial_whitespace = !has_character;

    for (position, &ch) in text[..=behind].iter().enumerate().rev() {
        match CharClass::of(ch) {
            CharClass::Punctuation => {
                // Started in whitespace and hit punctuation before any word
                // char: the punctuation itself is the boundary.
                return if initial_whitespace && !has_character {
                    Some(position)
                } else {
                    Some(position + 1)
                };
            }
            CharClass::Whitespace => {
                if has_character {
                    return Some(position + 1);
                }
            }
            CharClass::Letter | CharClass::Other => has_character = true,
        }
    }

    Some(0)
}

/// Iterator over successive boundaries after a starting index
#[derive(Debug, Clone)]
pub struct ForwardBoundaries<'a> {
    text: &'a [char],
    cursor: Option<usize>,
}

impl Iterator for ForwardBoundaries<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let boundary = next_word_boundary(self.text, self.cursor?);
        self.cursor = boundary;
        boundary
    }
}

impl FusedIterator for ForwardBoundaries<'_> {}

/// Iterator over successive boundaries before a starting index
#[derive(Debug, Clone)]
pub struct BackwardBoundaries<'a> {
    text: &'a [char],
    cursor: Option<usize>,
}

impl Iterator for BackwardBoundaries<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let boundary = previous_word_boundary(self.text, self.cursor?);
        self.cursor = boundary;
        boundary
    }
}

impl FusedIterator for BackwardBoundaries<'_> {}

/// Walk every boundary after `from`, ending with `text.len()`.
///
/// Yields nothing when `from` is at or past the end of the text.
pub fn forward_boundaries(text: &[char], from: usize) -> ForwardBoundaries<'_> {
    ForwardBoundaries {
        text,
        cursor: Some(from),
    }
}

/// Walk every boundary before `from`, ending with `0`.
///
/// Yields nothing when `from` is zero or past the end of the text.
pub fn backward_boundaries(text: &[char], from: usize) -> BackwardBoundaries<'_> {
    BackwardBoundaries {
        text,
        cursor: Some(from),
    }
}

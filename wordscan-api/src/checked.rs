//! Checked entry points for hosts with nullable text and signed indices
//!
//! Embedding hosts (FFI callers, scripting bridges) hand over text that may
//! be absent and indices that may be negative. These functions validate
//! both before delegating to the scanner, and report violations as
//! [`ApiError::InvalidArgument`]. Indices past the end of the text are not
//! errors; they resolve to "no boundary".

use crate::error::{ApiError, Result};

fn require_text<'a>(text: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    text.ok_or_else(|| {
        log::debug!("rejected absent `{name}`");
        ApiError::invalid_argument(name, "must not be absent")
    })
}

fn require_index(index: i64) -> Result<usize> {
    if index < 0 {
        log::debug!("rejected negative character index {index}");
        return Err(ApiError::invalid_argument(
            "character_index",
            format!("must not be negative, got {index}"),
        ));
    }

    // Larger than any addressable text; scans treat it as past the end
    Ok(usize::try_from(index).unwrap_or(usize::MAX))
}

/// Check whether `next` continues the word in `existing_text`
///
/// # Errors
///
/// Returns [`ApiError::InvalidArgument`] when `existing_text` is absent.
pub fn check_word_continuation(existing_text: Option<&str>, next: char) -> Result<bool> {
    let existing = require_text(existing_text, "existing_text")?;
    Ok(wordscan_core::is_word_continuation(existing, next))
}

/// Find the next word boundary after a signed char index
///
/// # Errors
///
/// Returns [`ApiError::InvalidArgument`] when `text` is absent or
/// `character_index` is negative.
pub fn check_next_word_boundary(
    text: Option<&str>,
    character_index: i64,
) -> Result<Option<usize>> {
    let text = require_text(text, "text")?;
    let index = require_index(character_index)?;
    let chars: Vec<char> = text.chars().collect();
    Ok(wordscan_core::next_word_boundary(&chars, index))
}

/// Find the previous word boundary before a signed char index
///
/// # Errors
///
/// Returns [`ApiError::InvalidArgument`] when `text` is absent or
/// `character_index` is negative.
pub fn check_previous_word_boundary(
    text: Option<&str>,
    character_index: i64,
) -> Result<Option<usize>> {
    let text = require_text(text, "text")?;
    let index = require_index(character_index)?;
    let chars: Vec<char> = text.chars().collect();
    Ok(wordscan_core::previous_word_boundary(&chars, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuation_with_absent_text() {
        let result = check_word_continuation(None, 'a');
        assert!(matches!(
            result,
            Err(ApiError::InvalidArgument {
                name: "existing_text",
                ..
            })
        ));
    }

    #[test]
    fn test_continuation_with_text() {
        assert!(check_word_continuation(Some("a"), 'a').unwrap());
        assert!(!check_word_continuation(Some(""), 'a').unwrap());
        assert!(!check_word_continuation(Some(" "), '.').unwrap());
    }

    #[test]
    fn test_absent_text_for_scans() {
        assert!(matches!(
            check_next_word_boundary(None, 0),
            Err(ApiError::InvalidArgument { name: "text", .. })
        ));
        assert!(matches!(
            check_previous_word_boundary(None, 0),
            Err(ApiError::InvalidArgument { name: "text", .. })
        ));
    }

    #[test]
    fn test_negative_index() {
        let error = check_next_word_boundary(Some("word"), -1).unwrap_err();
        assert!(matches!(
            error,
            ApiError::InvalidArgument {
                name: "character_index",
                ..
            }
        ));
        assert!(error.to_string().contains("got -1"));

        assert!(check_previous_word_boundary(Some("word"), i64::MIN).is_err());
    }

    #[test]
    fn test_out_of_range_resolves_to_sentinel() {
        assert_eq!(check_next_word_boundary(Some("word"), 4).unwrap(), None);
        assert_eq!(check_next_word_boundary(Some(""), 0).unwrap(), None);
        assert_eq!(
            check_next_word_boundary(Some("word"), i64::MAX).unwrap(),
            None
        );
        assert_eq!(check_previous_word_boundary(Some("word"), 5).unwrap(), None);
        assert_eq!(check_previous_word_boundary(Some("word"), 0).unwrap(), None);
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(check_next_word_boundary(Some("word"), 1).unwrap(), Some(4));
        assert_eq!(
            check_next_word_boundary(Some("One. Two."), 3).unwrap(),
            Some(5)
        );
        assert_eq!(
            check_previous_word_boundary(Some("One.Two "), 8).unwrap(),
            Some(4)
        );
    }
}

//! Public API for wordscan word boundary navigation
//!
//! This crate wraps the scanner in `wordscan-core` with the pieces a host
//! application needs: a [`WordTokenizer`] interface, checked entry points
//! for nullable and signed arguments, a [`Text`] buffer that maps char
//! indices to byte offsets, and a [`BoundaryWalker`] that lists every
//! boundary in one direction.

#![warn(missing_docs)]

pub mod checked;
pub mod config;
pub mod dto;
pub mod error;
pub mod text;
pub mod tokenizer;

use std::sync::Arc;
use std::time::Instant;

// Re-export key types
pub use checked::{
    check_next_word_boundary, check_previous_word_boundary, check_word_continuation,
};
pub use config::{Config, ConfigBuilder};
pub use dto::{BoundaryDTO, Direction, Input, Metadata, Output};
pub use error::{ApiError, Result};
pub use text::Text;
pub use tokenizer::{SimpleWordTokenizer, WordTokenizer};

/// Walks word boundaries across a whole text
#[derive(Clone)]
pub struct BoundaryWalker {
    tokenizer: Arc<dyn WordTokenizer>,
    config: Config,
}

impl std::fmt::Debug for BoundaryWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryWalker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BoundaryWalker {
    /// Create a walker going forward from the start of the text
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a walker with a specific configuration
    pub fn with_config(config: Config) -> Self {
        Self::with_tokenizer(Arc::new(SimpleWordTokenizer), config)
    }

    /// Create a walker with a custom tokenizer
    pub fn with_tokenizer(tokenizer: Arc<dyn WordTokenizer>, config: Config) -> Self {
        Self { tokenizer, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the input and report every boundary in the configured direction
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read as UTF-8 text.
    pub fn walk(&self, input: Input) -> Result<Output> {
        let started = Instant::now();
        let text = Text::new(input.read_text()?);
        Ok(self.walk_buffer(&text, started))
    }

    /// Walk a string directly (convenience method)
    pub fn walk_text(&self, text: &str) -> Output {
        self.walk_buffer(&Text::new(text), Instant::now())
    }

    fn walk_buffer(&self, text: &Text, started: Instant) -> Output {
        let direction = self.config.direction();
        let start = self.config.start_for(text.len());
        let limit = self.config.limit();

        let mut boundaries = Vec::new();
        let mut cursor = start;
        let mut truncated = false;

        loop {
            let found = match direction {
                Direction::Forward => self.tokenizer.next_word_boundary(text, cursor),
                Direction::Backward => self.tokenizer.previous_word_boundary(text, cursor),
            };
            let Some(boundary) = found else { break };

            let progressed = match direction {
                Direction::Forward => boundary > cursor,
                Direction::Backward => boundary < cursor,
            };
            if !progressed {
                log::warn!(
                    "tokenizer returned {boundary} from {cursor} going {direction:?}, stopping"
                );
                break;
            }

            if limit.is_some_and(|limit| boundaries.len() >= limit) {
                truncated = true;
                break;
            }

            let byte_offset = text.byte_offset(boundary).unwrap_or(text.byte_len());
            boundaries.push(BoundaryDTO::new(boundary, byte_offset, direction));
            cursor = boundary;
        }

        log::debug!(
            "walked {} boundaries {direction:?} from {start} over {} chars",
            boundaries.len(),
            text.len()
        );

        let metadata = Metadata {
            total_bytes: text.byte_len(),
            total_chars: text.len(),
            start,
            direction,
            boundary_count: boundaries.len(),
            truncated,
            processing_time_ms: u64::try_from(started.elapsed().as_millis())
                .unwrap_or(u64::MAX),
        };

        Output {
            boundaries,
            metadata,
        }
    }
}

impl Default for BoundaryWalker {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Walk every boundary of a text going forward
pub fn walk_text(text: &str) -> Output {
    BoundaryWalker::new().walk_text(text)
}

/// Walk every boundary of a file going forward
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn walk_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    BoundaryWalker::new().walk(Input::from_file(path.as_ref().to_path_buf()))
}

//! Word tokenizer interface

use crate::text::Text;

/// Capability interface consumed by text-editing and layout code
///
/// Implementations must be pure: the same inputs always produce the same
/// answer, and no call observes another.
pub trait WordTokenizer: Send + Sync {
    /// Check whether appending `next` to `existing` continues the same word
    fn is_word_continuation(&self, existing: &str, next: char) -> bool;

    /// First boundary strictly after `index`, or `None` at end of text
    fn next_word_boundary(&self, text: &Text, index: usize) -> Option<usize>;

    /// First boundary strictly before `index`, or `None` at start of text
    fn previous_word_boundary(&self, text: &Text, index: usize) -> Option<usize>;
}

/// Fast, approximate tokenizer driven by Unicode character classes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleWordTokenizer;

impl SimpleWordTokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }
}

impl WordTokenizer for SimpleWordTokenizer {
    fn is_word_continuation(&self, existing: &str, next: char) -> bool {
        let continues = wordscan_core::is_word_continuation(existing, next);
        log::trace!("continuation of {existing:?} with {next:?}: {continues}");
        continues
    }

    fn next_word_boundary(&self, text: &Text, index: usize) -> Option<usize> {
        let boundary = wordscan_core::next_word_boundary(text.as_chars(), index);
        log::trace!("next boundary from {index} of {}: {boundary:?}", text.len());
        boundary
    }

    fn previous_word_boundary(&self, text: &Text, index: usize) -> Option<usize> {
        let boundary = wordscan_core::previous_word_boundary(text.as_chars(), index);
        log::trace!("previous boundary from {index} of {}: {boundary:?}", text.len());
        boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tokenizer that treats every char as its own word
    struct CharTokenizer;

    impl WordTokenizer for CharTokenizer {
        fn is_word_continuation(&self, _existing: &str, _next: char) -> bool {
            false
        }

        fn next_word_boundary(&self, text: &Text, index: usize) -> Option<usize> {
            (index < text.len()).then_some(index + 1)
        }

        fn previous_word_boundary(&self, text: &Text, index: usize) -> Option<usize> {
            (index > 0 && index <= text.len()).then(|| index - 1)
        }
    }

    #[test]
    fn test_simple_tokenizer_scenarios() {
        let tokenizer = SimpleWordTokenizer::new();

        let text = Text::new("One. Two.");
        assert_eq!(tokenizer.next_word_boundary(&text, 3), Some(5));
        assert_eq!(tokenizer.previous_word_boundary(&text, 9), Some(8));

        let text = Text::new("One.Two ");
        assert_eq!(tokenizer.previous_word_boundary(&text, 8), Some(4));

        assert!(tokenizer.is_word_continuation("a", 'a'));
        assert!(!tokenizer.is_word_continuation("a", '.'));
    }

    #[test]
    fn test_trait_objects() {
        let tokenizers: Vec<Box<dyn WordTokenizer>> = vec![
            Box::new(SimpleWordTokenizer) as Box<dyn WordTokenizer>,
            Box::new(CharTokenizer),
        ];
        let text = Text::new("ab cd");

        let nexts: Vec<Option<usize>> = tokenizers
            .iter()
            .map(|tokenizer| tokenizer.next_word_boundary(&text, 0))
            .collect();
        assert_eq!(nexts, vec![Some(3), Some(1)]);

        for tokenizer in &tokenizers {
            assert_eq!(tokenizer.next_word_boundary(&text, 5), None);
            assert_eq!(tokenizer.previous_word_boundary(&text, 0), None);
        }
    }
}

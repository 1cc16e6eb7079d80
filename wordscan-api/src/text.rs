//! Char-indexed text buffer
//!
//! Hosts address text by char index, while Rust strings are addressed by
//! UTF-8 byte offset. `Text` keeps both views of the same string so scan
//! results can be handed back in either unit.

use std::fmt;

/// Immutable text with char-index and byte-offset views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    source: String,
    chars: Vec<char>,
    /// Byte offset of each char, plus the total byte length at the end
    byte_offsets: Vec<usize>,
}

impl Text {
    /// Create a text buffer from a string
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut chars = Vec::with_capacity(source.len());
        let mut byte_offsets = Vec::with_capacity(source.len() + 1);

        for (offset, ch) in source.char_indices() {
            chars.push(ch);
            byte_offsets.push(offset);
        }
        byte_offsets.push(source.len());

        Self {
            source,
            chars,
            byte_offsets,
        }
    }

    /// Number of chars
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the text has no chars
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of UTF-8 bytes
    pub fn byte_len(&self) -> usize {
        self.source.len()
    }

    /// The chars of the text
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// The text as a string slice
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Byte offset of a char index; `len()` maps to the byte length
    pub fn byte_offset(&self, char_index: usize) -> Option<usize> {
        self.byte_offsets.get(char_index).copied()
    }

    /// Char index of a byte offset, if it lies on a char boundary
    pub fn char_index(&self, byte_offset: usize) -> Option<usize> {
        self.byte_offsets.binary_search(&byte_offset).ok()
    }

    /// The text from a char index to the end
    pub fn slice_from(&self, char_index: usize) -> Option<&str> {
        let start = self.byte_offset(char_index)?;
        Some(&self.source[start..])
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<&str> for Text {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Text {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

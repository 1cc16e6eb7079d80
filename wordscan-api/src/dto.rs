//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for boundary walking
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Towards the end of the text
    #[default]
    Forward,
    /// Towards the start of the text
    Backward,
}

/// A boundary found by a walk
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryDTO {
    /// Char index in the text
    pub char_offset: usize,
    /// Byte offset in the text
    pub byte_offset: usize,
    /// Direction the boundary was found in
    pub direction: Direction,
}

impl BoundaryDTO {
    /// Create a new boundary DTO
    pub fn new(char_offset: usize, byte_offset: usize, direction: Direction) -> Self {
        Self {
            char_offset,
            byte_offset,
            direction,
        }
    }
}

/// Walk metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes in the text
    pub total_bytes: usize,
    /// Total chars in the text
    pub total_chars: usize,
    /// Char index the walk started from
    pub start: usize,
    /// Walk direction
    pub direction: Direction,
    /// Number of boundaries reported
    pub boundary_count: usize,
    /// Whether the walk stopped at the configured limit
    pub truncated: bool,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output with boundaries and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Boundaries in walk order
    pub boundaries: Vec<BoundaryDTO>,
    /// Walk metadata
    pub metadata: Metadata,
}

impl Output {
    /// Char offsets of all boundaries, in walk order
    pub fn char_offsets(&self) -> Vec<usize> {
        self.boundaries.iter().map(|b| b.char_offset).collect()
    }

    /// Number of boundaries
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// True when no boundary was found
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Serialize to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

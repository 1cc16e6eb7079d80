//! Output formatting module

use crate::input::Source;
use anyhow::Result;
use wordscan_api::Output;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the boundaries found in one source
    fn format_walk(&mut self, source: &Source, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One boundary per line with a preview of the following text
    Text,
    /// JSON array with boundaries and metadata per input
    Json,
}

impl OutputFormat {
    /// Parse a format name from the configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

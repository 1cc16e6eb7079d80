//! Plain text output formatter

use super::OutputFormatter;
use crate::input::Source;
use anyhow::Result;
use std::io::{self, Write};
use wordscan_api::Output;

/// Plain text formatter - outputs one boundary per line
pub struct TextFormatter<W: Write> {
    writer: W,
    preview_chars: usize,
    show_labels: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, preview_chars: usize, show_labels: bool) -> Self {
        Self {
            writer,
            preview_chars,
            show_labels,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(preview_chars: usize, show_labels: bool) -> Self {
        Self::new(io::stdout(), preview_chars, show_labels)
    }
}

/// The first `max_chars` chars from `byte_offset`, with controls escaped
fn preview(text: &str, byte_offset: usize, max_chars: usize) -> String {
    text.get(byte_offset..)
        .unwrap_or_default()
        .chars()
        .take(max_chars)
        .flat_map(char::escape_debug)
        .collect()
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_walk(&mut self, source: &Source, output: &Output) -> Result<()> {
        if self.show_labels {
            writeln!(self.writer, "== {}", source.label)?;
        }

        for boundary in &output.boundaries {
            if self.preview_chars == 0 {
                writeln!(self.writer, "{}", boundary.char_offset)?;
            } else {
                let preview = preview(&source.text, boundary.byte_offset, self.preview_chars);
                writeln!(self.writer, "{}\t{}", boundary.char_offset, preview)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

//! JSON output formatter

use super::OutputFormatter;
use crate::input::Source;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use wordscan_api::Output;

/// JSON formatter - outputs one record per source as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<WalkRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct WalkRecord {
    /// Source label
    pub source: String,
    /// Boundaries and metadata
    #[serde(flatten)]
    pub output: Output,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_walk(&mut self, source: &Source, output: &Output) -> Result<()> {
        self.records.push(WalkRecord {
            source: source.label.clone(),
            output: output.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

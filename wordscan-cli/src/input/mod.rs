//! Input handling module

pub mod glob_resolver;

pub use glob_resolver::resolve_patterns;

use crate::error::CliError;
use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use wordscan_api::Input;

/// A text to scan, with a label for output
#[derive(Debug)]
pub struct Source {
    /// File path, `<text>` or `<stdin>`
    pub label: String,
    /// The text content
    pub text: String,
}

/// Where the text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// Literal text from the command line
    Text(String),
    /// Files or glob patterns
    Files(Vec<String>),
    /// Standard input
    Stdin,
}

impl SourceSpec {
    /// Pick a source from the `--text` and `--input` options
    pub fn from_args(text: Option<&str>, patterns: &[String]) -> Result<Self> {
        match (text, patterns.is_empty()) {
            (Some(_), false) => Err(CliError::InvalidInput(
                "--text cannot be combined with --input".to_string(),
            )
            .into()),
            (Some(text), true) => Ok(SourceSpec::Text(text.to_string())),
            (None, false) => Ok(SourceSpec::Files(patterns.to_vec())),
            (None, true) => Ok(SourceSpec::Stdin),
        }
    }

    /// Read every text this spec names
    pub fn read(&self) -> Result<Vec<Source>> {
        match self {
            SourceSpec::Text(text) => Ok(vec![Source {
                label: "<text>".to_string(),
                text: text.clone(),
            }]),
            SourceSpec::Files(patterns) => resolve_patterns(patterns)?
                .into_iter()
                .map(read_file)
                .collect(),
            SourceSpec::Stdin => {
                let text = Input::from_reader(io::stdin())
                    .read_text()
                    .context("Failed to read standard input")?;
                Ok(vec![Source {
                    label: "<stdin>".to_string(),
                    text,
                }])
            }
        }
    }

    /// Read exactly one text, for commands that take a single cursor
    pub fn read_single(&self) -> Result<Source> {
        let mut sources = self.read()?;
        if sources.len() != 1 {
            return Err(CliError::InvalidInput(format!(
                "expected exactly one input, found {}",
                sources.len()
            ))
            .into());
        }
        Ok(sources.remove(0))
    }
}

fn read_file(path: PathBuf) -> Result<Source> {
    log::info!("reading {}", path.display());
    let text = Input::from_file(path.clone())
        .read_text()
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(Source {
        label: path.display().to_string(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_args() {
        assert_eq!(
            SourceSpec::from_args(Some("abc"), &[]).unwrap(),
            SourceSpec::Text("abc".to_string())
        );
        assert_eq!(
            SourceSpec::from_args(None, &["a.txt".to_string()]).unwrap(),
            SourceSpec::Files(vec!["a.txt".to_string()])
        );
        assert_eq!(SourceSpec::from_args(None, &[]).unwrap(), SourceSpec::Stdin);
    }

    #[test]
    fn test_conflicting_args() {
        let result = SourceSpec::from_args(Some("abc"), &["a.txt".to_string()]);
        assert!(result.unwrap_err().to_string().contains("cannot be combined"));
    }

    #[test]
    fn test_read_text() {
        let source = SourceSpec::Text("One. Two.".to_string())
            .read_single()
            .unwrap();
        assert_eq!(source.label, "<text>");
        assert_eq!(source.text, "One. Two.");
    }

    #[test]
    fn test_read_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "beta").unwrap();

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let spec = SourceSpec::Files(vec![pattern]);

        let sources = spec.read().unwrap();
        let texts: Vec<&str> = sources.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "beta"]);

        assert!(spec.read_single().is_err());
    }
}

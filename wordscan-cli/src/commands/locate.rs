//! Next/previous boundary command implementation

use crate::input::SourceSpec;
use anyhow::Result;
use clap::Args;
use wordscan_api::{check_next_word_boundary, check_previous_word_boundary};

/// Arguments for the next and prev commands
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Text to scan (default: read stdin)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Input file to scan
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<String>,

    /// Char index of the cursor
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub index: i64,
}

impl LocateArgs {
    /// Print the next boundary, or `none`
    pub fn execute_next(&self) -> Result<()> {
        let source = SourceSpec::from_args(self.text.as_deref(), &self.input)?.read_single()?;
        let boundary = check_next_word_boundary(Some(source.text.as_str()), self.index)?;
        log::info!("next boundary from {} in {}: {boundary:?}", self.index, source.label);
        println!("{}", render(boundary));
        Ok(())
    }

    /// Print the previous boundary, or `none`
    pub fn execute_previous(&self) -> Result<()> {
        let source = SourceSpec::from_args(self.text.as_deref(), &self.input)?.read_single()?;
        let boundary = check_previous_word_boundary(Some(source.text.as_str()), self.index)?;
        log::info!("previous boundary from {} in {}: {boundary:?}", self.index, source.label);
        println!("{}", render(boundary));
        Ok(())
    }
}

fn render(boundary: Option<usize>) -> String {
    boundary.map_or_else(|| "none".to_string(), |index| index.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(render(Some(5)), "5");
        assert_eq!(render(Some(0)), "0");
        assert_eq!(render(None), "none");
    }
}

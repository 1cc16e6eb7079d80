//! Walk command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::SourceSpec;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use anyhow::Result;
use clap::Args;
use std::io;
use wordscan_api::{BoundaryWalker, Config, Direction};

/// Arguments for the walk command
#[derive(Debug, Args)]
pub struct WalkArgs {
    /// Text to scan (default: read stdin)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Walk from the end of the text towards the start
    #[arg(short, long)]
    pub backward: bool,

    /// Char index to start from
    #[arg(short, long)]
    pub start: Option<usize>,

    /// Maximum boundaries per input
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format (default from configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl WalkArgs {
    /// Execute the walk command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let sources = SourceSpec::from_args(self.text.as_deref(), &self.input)?.read()?;
        let walker = BoundaryWalker::with_config(self.walk_config(config)?);
        let format = self.output_format(config)?;

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::stdout(
                config.output.preview_chars,
                sources.len() > 1,
            )),
            OutputFormat::Json => Box::new(JsonFormatter::new(
                io::stdout(),
                config.output.pretty_json,
            )),
        };

        for source in &sources {
            let output = walker.walk_text(&source.text);
            log::info!(
                "{}: {} boundaries in {} chars",
                source.label,
                output.len(),
                output.metadata.total_chars
            );
            formatter.format_walk(source, &output)?;
        }

        formatter.finish()
    }

    /// Build the walk configuration from flags, falling back to the config file
    pub fn walk_config(&self, config: &CliConfig) -> Result<Config> {
        let mut builder = Config::builder()
            .direction(if self.backward {
                Direction::Backward
            } else {
                Direction::Forward
            })
            .limit(self.limit.or_else(|| config.walk_limit()));

        if let Some(start) = self.start {
            builder = builder.start(start);
        }

        Ok(builder.build()?)
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }
}

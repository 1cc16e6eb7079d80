//! Generate config command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::InvalidInput(format!(
                "{} already exists, pass --force to overwrite",
                self.output.display()
            ))
            .into());
        }

        let template = Self::generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration written to {}", self.output.display());
        println!("Use it with: wordscan --config {} walk -i <FILE>", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# wordscan configuration\n\
             #\n\
             # output.default_format: \"text\" or \"json\"\n\
             # output.preview_chars: chars shown after each boundary (0 = offsets only)\n\
             # walk.default_limit: boundaries per input (0 = unlimited)\n\n\
             {body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back_to_defaults() {
        let template = GenerateConfigArgs::generate_template().unwrap();
        assert!(template.starts_with("# wordscan configuration"));
        assert_eq!(
            CliConfig::from_toml(&template).unwrap(),
            CliConfig::default()
        );
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wordscan.toml");
        fs::write(&output, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: output.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
    }
}

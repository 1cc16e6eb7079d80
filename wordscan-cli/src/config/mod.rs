//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Walk configuration
    #[serde(default)]
    pub walk: WalkConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Number of chars shown after each boundary in text output
    pub preview_chars: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            preview_chars: 24,
        }
    }
}

/// Walk-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct WalkConfig {
    /// Maximum boundaries per input (0 = unlimited)
    pub default_limit: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    fn validate(&self) -> Result<()> {
        match self.output.default_format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(CliError::ConfigError(format!(
                "unknown output format '{other}', expected 'text' or 'json'"
            ))
            .into()),
        }
    }

    /// Walk limit as an option (0 means unlimited)
    pub fn walk_limit(&self) -> Option<usize> {
        (self.walk.default_limit > 0).then_some(self.walk.default_limit)
    }
}

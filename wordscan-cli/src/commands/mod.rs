//! CLI command implementations

use clap::Subcommand;

pub mod continues;
pub mod generate_config;
pub mod locate;
pub mod walk;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the next word boundary after a char index
    Next(locate::LocateArgs),

    /// Print the previous word boundary before a char index
    Prev(locate::LocateArgs),

    /// Check whether a char continues the word being typed
    Continues(continues::ContinuesArgs),

    /// List every word boundary in one direction
    Walk(walk::WalkArgs),

    /// Write a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

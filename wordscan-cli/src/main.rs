//! wordscan command-line entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wordscan_cli::commands::Commands;
use wordscan_cli::config::CliConfig;

/// Word boundary navigation for plain text
#[derive(Debug, Parser)]
#[command(name = "wordscan", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    log::debug!("Arguments: {:?}", cli);

    let config = CliConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Next(args) => args.execute_next(),
        Commands::Prev(args) => args.execute_previous(),
        Commands::Continues(args) => args.execute(),
        Commands::Walk(args) => args.execute(&config),
        Commands::GenerateConfig(args) => args.execute(),
    }
}

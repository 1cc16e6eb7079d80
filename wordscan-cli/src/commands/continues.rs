//! Continuation command implementation

use anyhow::Result;
use clap::Args;
use wordscan_api::check_word_continuation;

/// Arguments for the continues command
#[derive(Debug, Args)]
pub struct ContinuesArgs {
    /// The word typed so far (may be empty)
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub existing: String,

    /// The char about to be appended
    #[arg(short, long, value_name = "CHAR")]
    pub next: char,
}

impl ContinuesArgs {
    /// Print `true` or `false`
    pub fn execute(&self) -> Result<()> {
        let continues = check_word_continuation(Some(self.existing.as_str()), self.next)?;
        log::info!("{:?} + {:?} continues: {continues}", self.existing, self.next);
        println!("{continues}");
        Ok(())
    }
}

use base32::Encoded;
use clap::Args;
use tracing::debug;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the Base32 text file. If not specified, reads from stdin
    file: Option<String>,

    /// Insert a hyphen every N symbols (0 disables grouping)
    #[arg(short, long, default_value_t = 0)]
    group: usize,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;

    let encoded = Encoded::normalize(&text)?;
    debug!(chars = text.len(), symbols = encoded.len(), "normalized");

    println!("{}", encoded.grouped(config.group));

    Ok(())
}

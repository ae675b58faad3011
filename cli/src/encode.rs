use base32::Encoded;
use clap::Args;
use tracing::debug;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,

    /// Insert a hyphen every N symbols (0 disables grouping)
    #[arg(short, long, default_value_t = 0)]
    group: usize,

    /// Print lowercase symbols
    #[arg(short, long)]
    lowercase: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let data = read_input(config.file.as_deref())?;

    let encoded = Encoded::from_bytes(&data)?;
    debug!(bytes = data.len(), symbols = encoded.len(), "encoded");

    let mut text = encoded.grouped(config.group);
    if config.lowercase {
        text.make_ascii_lowercase();
    }
    println!("{text}");

    Ok(())
}

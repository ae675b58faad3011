use std::io::{self, Write};

use clap::Args;
use tracing::debug;

use crate::error::Result;
use crate::utils::{format_hex_dump, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the Base32 text file. If not specified, reads from stdin
    file: Option<String>,

    /// Output as hexadecimal dump instead of binary
    #[arg(long)]
    hex: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;

    let data = base32::decode(&text)?;
    debug!(chars = text.len(), bytes = data.len(), "decoded");

    if config.hex {
        print!("{}", format_hex_dump(&data));
    } else {
        io::stdout().write_all(&data)?;
    }

    Ok(())
}

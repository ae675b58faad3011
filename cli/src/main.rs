use clap::{Parser, Subcommand};
use tracing::debug;

mod decode;
mod encode;
mod error;
mod normalize;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "b32")]
#[command(about = "Base32 encoder and forgiving decoder", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data as Base32 text
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
    /// Decode Base32 text, ignoring case, separators and padding
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Print the canonical form of hand-typed Base32 text
    Normalize {
        #[command(flatten)]
        config: normalize::Config,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over --debug
    let default_directive = if cli.debug { "b32=debug" } else { "b32=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encode { config } => {
            encode::execute(config)?;
        }
        Commands::Decode { config } => {
            decode::execute(config)?;
        }
        Commands::Normalize { config } => {
            normalize::execute(config)?;
        }
    }

    debug!("done");
    Ok(())
}

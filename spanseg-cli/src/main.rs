//! spanseg command-line entry point

use anyhow::Result;
use clap::Parser;
use spanseg_cli::commands::Commands;

/// Delimiter-aligned text segmentation with character spans
#[derive(Debug, Parser)]
#[command(name = "spanseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

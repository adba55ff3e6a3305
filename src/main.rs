use anyhow::Result;
use clap::Parser;
use console::Term;
use std::io::{self, Write};

use naval_cli::cli::{self, Cli};
use naval_cli::utils::logger::{self, LogLevel};
use naval_cli::QuoteStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        logger::init_global_logger(LogLevel::Debug)?;
    }

    // Help is handled by clap; version returns before the store is built
    let color_supported = Term::stdout().features().colors_supported();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::execute(&cli, color_supported, QuoteStore::new, &mut out)?;
    out.flush()?;

    Ok(())
}

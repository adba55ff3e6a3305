//! Diagnostic logging goes to stderr only; quote output stays the same

use clap::Parser;
use naval_cli::cli::{self, Cli, DisplayConfig};
use naval_cli::utils::logger::{self, LogLevel};
use naval_cli::QuoteStore;

fn render(config: &DisplayConfig, seed: u64) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut store = QuoteStore::with_seed(seed);
    let mut out = Vec::new();
    cli::run(config, &mut store, &mut out)?;
    Ok(out)
}

#[test]
fn test_debug_logging_leaves_stdout_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let single = DisplayConfig::from_cli(&Cli::try_parse_from(["naval-cli", "--no-color"])?, true);
    let several = DisplayConfig::from_cli(
        &Cli::try_parse_from(["naval-cli", "--no-color", "--count", "1000"])?,
        true,
    );

    let single_before = render(&single, 17)?;
    let several_before = render(&several, 17)?;
    assert!(!logger::enabled(LogLevel::Debug));

    logger::init_global_logger(LogLevel::Debug)?;
    assert!(logger::enabled(LogLevel::Debug));
    assert!(logger::enabled(LogLevel::Warn));

    assert_eq!(render(&single, 17)?, single_before);
    assert_eq!(render(&several, 17)?, several_before);
    Ok(())
}

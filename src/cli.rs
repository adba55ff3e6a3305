use std::io::{self, Write};

use clap::{ArgAction, Parser};

use crate::display::Presenter;
use crate::quotes::QuoteStore;
use crate::utils::colors::Palette;
use crate::utils::logger::{self, LogLevel};
use crate::version;

const EXAMPLES: &str = "\
EXAMPLES:
    naval-cli                    # Display a random quote with ASCII art
    naval-cli --no-ascii         # Display quote without ASCII art
    naval-cli --count 5          # Display 5 random quotes
    naval-cli --no-color         # Display without colors

For more information, visit: https://github.com/wimpywarlord/naval-cli";

#[derive(Parser, Debug)]
#[command(name = "naval-cli")]
#[command(about = "Display Naval Ravikant's wisdom in your terminal", long_about = None)]
#[command(disable_help_flag = true, after_help = EXAMPLES)]
pub struct Cli {
    /// Display quote without ASCII art
    #[arg(long)]
    pub no_ascii: bool,

    /// Number of quotes to display
    #[arg(long, value_name = "n", default_value_t = 1, allow_negative_numbers = true)]
    pub count: i64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show version information
    #[arg(long)]
    pub version: bool,

    /// Write diagnostic messages to stderr
    #[arg(long)]
    pub debug: bool,

    /// Show this help message
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// What to show, derived from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub show_ascii: bool,
    pub color_enabled: bool,
    pub count: usize,
}

impl DisplayConfig {
    /// `color_supported` is whether stdout can render color at all
    pub fn from_cli(cli: &Cli, color_supported: bool) -> Self {
        Self {
            show_ascii: !cli.no_ascii,
            color_enabled: !cli.no_color && color_supported,
            count: clamp_count(cli.count),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_ascii: true,
            color_enabled: true,
            count: 1,
        }
    }
}

/// Counts below one mean a single quote; the store caps the top end
pub fn clamp_count(count: i64) -> usize {
    if count < 1 {
        1
    } else {
        usize::try_from(count).unwrap_or(usize::MAX)
    }
}

/// Handle a parsed command line, writing everything it prints to `out`.
///
/// `--version` prints the banner and returns without calling `make_store`;
/// otherwise the store is built once and quotes are shown.
pub fn execute<W, F>(cli: &Cli, color_supported: bool, make_store: F, out: &mut W) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> QuoteStore,
{
    if cli.version {
        return writeln!(out, "{}", version::banner());
    }

    let config = DisplayConfig::from_cli(cli, color_supported);
    if logger::enabled(LogLevel::Debug) {
        logger::debug(&format!("display config: {:?}", config));
    }

    let mut store = make_store();
    run(&config, &mut store, out)
}

/// Select quotes from `store` and write them to `out`.
///
/// A single quote may come with the portrait; several quotes are always
/// numbered and shown without it.
pub fn run<W: Write>(config: &DisplayConfig, store: &mut QuoteStore, out: &mut W) -> io::Result<()> {
    let presenter = Presenter::new(Palette::new(config.color_enabled));

    if config.count == 1 {
        let quote = store.get_random();
        if logger::enabled(LogLevel::Debug) {
            logger::debug(&format!("selected quote: {:?}", quote.text));
        }
        presenter.single(out, &quote, config.show_ascii)
    } else {
        if config.count > store.len() {
            logger::warn(&format!(
                "requested {} quotes, only {} available",
                config.count,
                store.len()
            ));
        }
        let quotes = store.get_multiple(config.count);
        if logger::enabled(LogLevel::Debug) {
            logger::debug(&format!("selected {} quotes", quotes.len()));
        }
        presenter.multiple(out, &quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(-5), 1);
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_count(1), 1);
        assert_eq!(clamp_count(7), 7);
        assert_eq!(clamp_count(1000), 1000);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["naval-cli"]).unwrap();
        assert!(!cli.no_ascii);
        assert!(!cli.no_color);
        assert!(!cli.version);
        assert!(!cli.debug);
        assert_eq!(cli.count, 1);
        assert_eq!(DisplayConfig::from_cli(&cli, true), DisplayConfig::default());
    }

    #[test]
    fn test_flags_map_to_display_config() {
        let cli = Cli::try_parse_from(["naval-cli", "--no-ascii", "--no-color", "--count", "4"]).unwrap();
        let config = DisplayConfig::from_cli(&cli, true);
        assert_eq!(
            config,
            DisplayConfig {
                show_ascii: false,
                color_enabled: false,
                count: 4,
            }
        );
    }

    #[test]
    fn test_negative_count_is_clamped() {
        let cli = Cli::try_parse_from(["naval-cli", "--count", "-3"]).unwrap();
        assert_eq!(cli.count, -3);
        assert_eq!(DisplayConfig::from_cli(&cli, true).count, 1);
    }

    #[test]
    fn test_color_needs_terminal_support() {
        let cli = Cli::try_parse_from(["naval-cli"]).unwrap();
        assert!(!DisplayConfig::from_cli(&cli, false).color_enabled);
    }

    #[test]
    fn test_short_flags_are_rejected() {
        assert!(Cli::try_parse_from(["naval-cli", "-h"]).is_err());
        assert!(Cli::try_parse_from(["naval-cli", "-V"]).is_err());
    }
}

//! Version string and build metadata.
//!
//! Release builds inject metadata at compile time:
//! `NAVAL_BUILD_DATE=2024-01-01 NAVAL_GIT_COMMIT=abc1234 cargo build --release`

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const TAGLINE: &str = "A CLI tool for Naval Ravikant's wisdom";

const BUILD_DATE: Option<&str> = option_env!("NAVAL_BUILD_DATE");
const GIT_COMMIT: Option<&str> = option_env!("NAVAL_GIT_COMMIT");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_date: Option<&'static str>,
    pub git_commit: Option<&'static str>,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: VERSION,
            build_date: BUILD_DATE,
            git_commit: GIT_COMMIT,
        }
    }

    pub fn info(&self) -> String {
        match self.build_date {
            None => format!("naval-cli v{} (development build)", self.version),
            Some(date) => format!(
                "naval-cli v{} (built: {}, commit: {})",
                self.version,
                date,
                self.git_commit.unwrap_or("unknown")
            ),
        }
    }
}

/// Formatted version with build metadata
pub fn info() -> String {
    BuildInfo::current().info()
}

/// Everything `--version` prints
pub fn banner() -> String {
    format!("{}\n{}", info(), TAGLINE)
}

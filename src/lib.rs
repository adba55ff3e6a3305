// Library exports for naval-cli components

pub mod art;
pub mod cli;
pub mod display;
pub mod quotes;
pub mod utils;
pub mod version;
pub mod wrap;

// Re-export commonly used types
pub use cli::{Cli, DisplayConfig};
pub use display::Presenter;
pub use quotes::{Quote, QuoteStore};
pub use utils::colors::Palette;

//! Utility modules for naval-cli
//!
//! Output colors and diagnostic logging shared by the binary and the library.

pub mod colors;
pub mod logger;

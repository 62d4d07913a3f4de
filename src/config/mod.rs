//! Configuration module for json_highlight.
//!
//! Defines the CLI surface, the constants behind its defaults, and the enums
//! shared between the command line and the library API.

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};

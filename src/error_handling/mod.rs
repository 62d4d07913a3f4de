//! Error handling for json_highlight.
//!
//! This module provides the typed failures surfaced by the library:
//! - Initialization failures (logger, HTTP client)
//! - Endpoint fetch failures (request, status, body size, JSON parsing)
//! - Selection failures (a JSON Pointer that matched nothing)
//!
//! Orchestration code wraps these in `anyhow::Error` with context, so the
//! binary prints a full cause chain on exit.

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, SelectError};

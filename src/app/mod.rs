//! Application-level helpers used by the run orchestration.

mod statistics;

pub use statistics::print_token_statistics;

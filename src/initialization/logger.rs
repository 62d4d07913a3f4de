//! Logger initialization.
//!
//! Sets up `env_logger` with the two formats the CLI exposes: a colored
//! human-readable format and a one-object-per-line JSON format.

use std::io::Write;

use colored::Colorize;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the given level and format.
///
/// `RUST_LOG` is honored as the starting point, then the provided level
/// overrides it, so `--log-level` always wins while `RUST_LOG` still works
/// for quick debugging. Chatty HTTP internals (`reqwest`, `hyper`) are pinned
/// to info so debug runs stay about this tool's own work.
///
/// Uses `try_init`, so a second call (as happens across tests) reports an
/// error instead of panicking.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` when a logger is already
/// installed.
///
/// # Examples
///
/// ```bash
/// # RUST_LOG works without any flags
/// RUST_LOG=debug json_highlight policy.json
///
/// # The CLI flag takes precedence
/// RUST_LOG=debug json_highlight policy.json --log-level info
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("json_highlight", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| write_json_line(buf, record)),
        LogFormat::Plain => builder.format(|buf, record| write_plain_line(buf, record)),
    };

    builder.try_init().map_err(InitializationError::from)
}

/// One JSON object per line: millisecond timestamp, level, target, message.
fn write_json_line(buf: &mut env_logger::fmt::Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

/// Colored single-line format with an emoji marker per level.
fn write_plain_line(buf: &mut env_logger::fmt::Formatter, record: &Record) -> std::io::Result<()> {
    let level = record.level();
    let (emoji, colored_level) = match level {
        Level::Error => ("❌", level.to_string().red()),
        Level::Warn => ("⚠️", level.to_string().yellow()),
        Level::Info => ("✔️", level.to_string().green()),
        Level::Debug => ("🔍", level.to_string().blue()),
        Level::Trace => ("🔬", level.to_string().purple()),
    };

    writeln!(
        buf,
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        colored_level,
        record.args()
    )
}

//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CLASS_PREFIX, DEFAULT_PAGE_TITLE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::render::ThemeName;

/// Logging verbosity.
///
/// Ordered from quietest (`Error`) to loudest (`Trace`); each step admits
/// everything the previous one does plus one more kind of message.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Errors, warnings, and progress messages
    Info,
    /// Everything except trace
    Debug,
    /// Everything, including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Shape of emitted log lines.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Colored, human-readable lines (default)
    Plain,
    /// One JSON object per line, for machine consumption
    Json,
}

/// Command-line options and configuration.
///
/// This struct doubles as the library configuration: `clap` generates the CLI
/// surface from the field attributes, and `Default` builds the same struct
/// programmatically for library callers.
///
/// # Examples
///
/// ```bash
/// # Highlight a file into a standalone page
/// json_highlight policy.json --output policy.html
///
/// # Highlight stdin as a bare fragment
/// cat policy.json | json_highlight --fragment
///
/// # Fetch from an API-key-protected endpoint and pick out one field
/// json_highlight --url https://api.example.com/prod/policy --select /policy
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "json_highlight",
    about = "Renders JSON as syntax-highlighted, HTML-safe markup."
)]
pub struct Config {
    /// JSON file to read ("-" or omitted reads stdin)
    #[arg(value_parser)]
    pub input: Option<PathBuf>,

    /// Endpoint URL to fetch JSON from (takes precedence over the input file)
    #[arg(long)]
    pub url: Option<String>,

    /// API key sent in the x-api-key request header.
    ///
    /// Falls back to the `JSON_HIGHLIGHT_API_KEY` environment variable
    /// (which may come from a `.env` file). Never hardcode keys in pages
    /// or scripts that call this tool.
    #[arg(long)]
    pub api_key: Option<String>,

    /// JSON Pointer selecting the subtree to highlight (e.g. /policy)
    #[arg(long)]
    pub select: Option<String>,

    /// Re-serialize text input through the canonical 2-space pretty printer
    /// before highlighting (requires the input to parse as JSON)
    #[arg(long)]
    pub reformat: bool,

    /// Emit only the highlighted markup, without the page scaffold
    #[arg(long)]
    pub fragment: bool,

    /// Emit only the theme stylesheet and exit
    #[arg(long)]
    pub emit_css: bool,

    /// Color theme for the embedded stylesheet
    #[arg(long, value_enum, default_value_t = ThemeName::Light)]
    pub theme: ThemeName,

    /// CSS class prefix for token spans
    #[arg(long, default_value = DEFAULT_CLASS_PREFIX)]
    pub class_prefix: String,

    /// Title for the generated page
    #[arg(long, default_value = DEFAULT_PAGE_TITLE)]
    pub title: String,

    /// Output file (stdout if omitted)
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds for endpoint fetches
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print per-category token counts after highlighting
    #[arg(long)]
    pub show_stats: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            url: None,
            api_key: None,
            select: None,
            reformat: false,
            fragment: false,
            emit_css: false,
            theme: ThemeName::Light,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            title: DEFAULT_PAGE_TITLE.to_string(),
            output: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            show_stats: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

//! json_highlight library: JSON-to-HTML syntax highlighting
//!
//! This library renders JSON as syntax-highlighted, HTML-safe markup. Input
//! can come from text, a file, stdin, or a REST endpoint; output is a bare
//! fragment or a standalone page with an embedded, themed stylesheet.
//!
//! # Example
//!
//! ```
//! use json_highlight::highlight_text;
//!
//! let html = highlight_text(r#"{"name": "Alice", "admin": true}"#);
//! assert!(html.contains(r#"<span class="json-key">"name":</span>"#));
//! assert!(html.contains(r#"<span class="json-boolean">true</span>"#));
//! ```
//!
//! Fetching from endpoints and writing files goes through [`run_highlight`],
//! which requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling it within an async context.
//!
//! ```no_run
//! use json_highlight::{run_highlight, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: Some("https://api.example.com/prod/policy".to_string()),
//!     select: Some("/policy".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_highlight(config).await?;
//! println!("Highlighted {} tokens from {}", report.tokens, report.source);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod highlight;
pub mod initialization;
mod output;
pub mod render;

// Public API re-exports
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError, SelectError};
pub use highlight::{
    escape_html, highlight_text, highlight_text_with, highlight_value, highlight_value_with,
    HighlightOptions, TokenKind, TokenStats,
};
pub use render::{render_page, Theme, ThemeName};
pub use run::{run_highlight, HighlightReport};

// Internal run module (contains the main highlighting pipeline)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info, warn};
    use serde_json::Value;
    use std::io::Write as _;
    use std::path::Path;
    use tokio::io::AsyncReadExt;

    use crate::app::print_token_statistics;
    use crate::config::{Config, API_KEY_ENV};
    use crate::error_handling::SelectError;
    use crate::fetch::fetch_json;
    use crate::highlight::{
        highlight_text_with, highlight_value_with, HighlightOptions, TokenStats,
    };
    use crate::initialization::init_client;
    use crate::output::open_output;
    use crate::render::render_page;

    /// Results of a highlighting run.
    ///
    /// Contains summary statistics and metadata about the completed run.
    #[derive(Debug, Clone)]
    pub struct HighlightReport {
        /// Where the input came from ("stdin", a file path, or a URL)
        pub source: String,
        /// Output destination ("stdout" or a file path)
        pub destination: String,
        /// Number of tokens highlighted across all categories
        pub tokens: usize,
        /// Number of bytes written to the destination
        pub bytes_written: usize,
        /// Wall-clock time the run took, in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the highlighting pipeline with the provided configuration.
    ///
    /// This is the main entry point for the library. It acquires the JSON
    /// document (file, stdin, or endpoint), optionally selects a subtree and
    /// reformats it, highlights it, and writes a fragment or a standalone
    /// page to the configured destination.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the run (input source, output shape,
    ///   theme, network settings)
    ///
    /// # Returns
    ///
    /// Returns a `HighlightReport` containing summary statistics, or an error
    /// if the run failed to complete.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be read
    /// - The endpoint fetch fails or answers with a non-success status
    /// - The input must be parsed (selection or reformatting) but is not valid JSON
    /// - The selection pointer matches nothing (a [`SelectError`] in the chain)
    /// - The output file cannot be written
    ///
    /// # Example
    ///
    /// ```no_run
    /// use json_highlight::{run_highlight, Config};
    /// use std::path::PathBuf;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     input: Some(PathBuf::from("policy.json")),
    ///     output: Some(PathBuf::from("policy.html")),
    ///     ..Default::default()
    /// };
    /// let report = run_highlight(config).await?;
    /// println!("Wrote {} bytes", report.bytes_written);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_highlight(config: Config) -> Result<HighlightReport> {
        let start_time = std::time::Instant::now();
        let destination = config
            .output
            .as_deref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());

        // Stylesheet-only mode writes the theme CSS and stops
        if config.emit_css {
            let css = config.theme.theme().stylesheet(&config.class_prefix);
            let bytes_written = write_output(config.output.as_deref(), &css).await?;
            info!(
                "Wrote {} theme stylesheet ({} bytes)",
                config.theme, bytes_written
            );
            return Ok(HighlightReport {
                source: "stylesheet".to_string(),
                destination,
                tokens: 0,
                bytes_written,
                elapsed_seconds: start_time.elapsed().as_secs_f64(),
            });
        }

        if config.url.is_some() && config.input.is_some() {
            warn!("Both --url and an input file were given; using --url");
        }

        // Acquire the document. Fetched JSON arrives parsed; file and stdin
        // input stays raw text unless a later stage needs the parsed value.
        let (raw_text, mut value, source) = if let Some(url) = config.url.as_deref() {
            let client = init_client(&config).context("Failed to initialize HTTP client")?;
            let api_key = config
                .api_key
                .clone()
                .or_else(|| std::env::var(API_KEY_ENV).ok())
                .filter(|key| !key.is_empty());
            if api_key.is_none() {
                debug!("No API key configured; sending the request without one");
            }
            let fetched = fetch_json(&client, url, api_key.as_deref()).await?;
            (None, Some(fetched), url.to_string())
        } else {
            let (text, source) = read_input(&config).await?;
            (Some(text), None, source)
        };

        info!("Highlighting JSON from {}", source);

        // Selection and reformatting need the parsed document
        if value.is_none() && (config.reformat || config.select.is_some()) {
            let text = raw_text.as_deref().unwrap_or_default();
            let parsed: Value = serde_json::from_str(text)
                .with_context(|| format!("Input from {} is not valid JSON", source))?;
            value = Some(parsed);
        }

        if let Some(selector) = config.select.as_deref() {
            if let Some(document) = value.take() {
                let selected = match document.pointer(selector) {
                    Some(selected) => selected.clone(),
                    None => {
                        // Surface the endpoint's own explanation when the
                        // envelope carries one
                        let detail = document
                            .get("message")
                            .and_then(Value::as_str)
                            .unwrap_or("no matching value");
                        return Err(SelectError {
                            pointer: selector.to_string(),
                            detail: detail.to_string(),
                        }
                        .into());
                    }
                };
                value = Some(selected);
            }
        }

        let options = HighlightOptions {
            class_prefix: config.class_prefix.clone(),
        };
        let stats = TokenStats::new();
        let fragment = if let Some(document) = value.as_ref() {
            highlight_value_with(document, &options, &stats)
        } else {
            highlight_text_with(raw_text.as_deref().unwrap_or_default(), &options, &stats)
        };
        debug!("Highlighted fragment is {} bytes", fragment.len());

        let content = if config.fragment {
            let mut fragment = fragment;
            fragment.push('\n');
            fragment
        } else {
            render_page(
                &fragment,
                &config.title,
                config.theme.theme(),
                &config.class_prefix,
            )
        };

        let bytes_written = write_output(config.output.as_deref(), &content).await?;

        if config.show_stats {
            print_token_statistics(&stats);
        }

        Ok(HighlightReport {
            source,
            destination,
            tokens: stats.total(),
            bytes_written,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Reads the document text from the configured file or stdin.
    ///
    /// Returns the text together with a printable source name.
    async fn read_input(config: &Config) -> Result<(String, String)> {
        match config.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read input file: {}", path.display()))?;
                Ok((text, path.display().to_string()))
            }
            _ => {
                debug!("Reading JSON from stdin");
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .context("Failed to read from stdin")?;
                Ok((text, "stdin".to_string()))
            }
        }
    }

    /// Writes `content` to the configured destination and returns the byte count.
    async fn write_output(path: Option<&Path>, content: &str) -> Result<usize> {
        let mut writer = open_output(path).await?;
        writer
            .write_all(content.as_bytes())
            .context("Failed to write output")?;
        writer.flush().context("Failed to flush output")?;
        Ok(content.len())
    }
}

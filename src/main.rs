//! CLI binary entry point.
//!
//! Everything interesting lives in the `json_highlight` library; this wrapper
//! only loads `.env`, parses arguments, installs the logger, runs the
//! pipeline, and prints the closing summary.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use json_highlight::initialization::init_logger_with;
use json_highlight::{run_highlight, Config};

/// Loads `.env` so `JSON_HIGHLIGHT_API_KEY` can live in a file instead of the
/// shell environment. Checks the working directory first, then next to the
/// executable itself, and silently does nothing when neither has one.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let emit_css = config.emit_css;
    let theme = config.theme;

    match run_highlight(config).await {
        Ok(report) => {
            // The summary goes to stdout, so skip it when the document itself
            // went there
            if report.destination != "stdout" {
                if emit_css {
                    println!(
                        "✅ Wrote {} theme stylesheet to {} ({} bytes)",
                        theme, report.destination, report.bytes_written
                    );
                } else {
                    println!(
                        "✅ Highlighted {} token{} from {} in {:.1}s",
                        report.tokens,
                        if report.tokens == 1 { "" } else { "s" },
                        report.source,
                        report.elapsed_seconds
                    );
                    println!(
                        "Output written to {} ({} bytes)",
                        report.destination, report.bytes_written
                    );
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("json_highlight error: {:#}", e);
            process::exit(1);
        }
    }
}

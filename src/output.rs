//! Output destination selection.
//!
//! Selects between a file destination and stdout, shielding stdout from
//! broken pipe errors so piping into a command that exits early does not
//! abort the run.

use anyhow::{Context, Result};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Wrapper around a Write that ignores broken pipe errors (EPIPE).
/// This allows graceful handling when stdout is piped to a command that exits early.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                // Ignore broken pipe - downstream command closed the pipe
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Opens the output destination.
///
/// Returns a writer for the file at `path`, or for stdout when `path` is
/// `None`. Stdout is wrapped so broken pipes end the run quietly instead of
/// surfacing as errors.
///
/// # Arguments
///
/// * `path` - Output file path, or `None` for stdout
///
/// # Errors
///
/// Returns an error if the output file cannot be created.
pub async fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = tokio::fs::File::create(path)
                .await
                .context(format!(
                    "Failed to create output file: {}",
                    path.display()
                ))?
                .into_std()
                .await;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(IgnoreBrokenPipe::new(io::stdout()))),
    }
}

use std::fs;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::paths;

/// Send tracing output to the log file, since the TUI owns the terminal.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v` count. The
/// returned guard flushes the writer when dropped and must be held until
/// exit.
pub fn init(verbose: u8) -> Result<WorkerGuard> {
    let path = paths::log_file();
    let dir = path
        .parent()
        .context("Log file path has no parent directory")?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_level(0), "info");
        assert_eq!(default_level(1), "debug");
        assert_eq!(default_level(2), "trace");
        assert_eq!(default_level(9), "trace");
    }
}

//! Logging setup
//!
//! Logs go to a daily-rolling file so the terminal only shows the dialogue.
//! Filter with `RUST_LOG` (default `finance_tutor=info`).

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "finance-tutor.log";
const DEFAULT_FILTER: &str = "finance_tutor=info";

/// Install the global subscriber writing to `log_dir`.
///
/// Keep the returned guard alive until shutdown; dropping it flushes
/// pending log lines.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_logging_creates_directory() {
        let temp = TempDir::new().unwrap();
        let log_dir = temp.path().join("nested").join("logs");

        // Another test may have installed a subscriber first
        match init_logging(&log_dir) {
            Ok(_guard) => {}
            Err(e) => assert!(
                e.to_string().contains("Failed to install tracing subscriber"),
                "unexpected error: {:#}",
                e
            ),
        }
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_init_logging_fails_when_directory_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("logs");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = init_logging(&blocker.join("nested")).unwrap_err();
        assert!(err.to_string().contains("Failed to create log directory"));
    }
}

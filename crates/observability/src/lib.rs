//! Tracing/logging setup shared by binaries and integration tests.

use std::path::PathBuf;

use thiserror::Error;

pub use tracing_appender::non_blocking::WorkerGuard;

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Where and how the process writes logs.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for the rolling log file. `None` disables file output.
    pub dir: Option<PathBuf>,
    /// File name prefix; rotated files get a date suffix.
    pub file_prefix: String,
    /// Rotated files kept on disk.
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: Some(PathBuf::from("logs")),
            file_prefix: "bank_api".to_string(),
            max_files: 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("failed to create log directory {path}: {source}")]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build rolling log appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),
}

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; only the first call installs a subscriber.
/// Keep the returned guard alive for as long as file logs should be flushed.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, ObservabilityError> {
    tracing::init(config)
}

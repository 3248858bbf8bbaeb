use std::path::PathBuf;
use thiserror::Error;

/// Failures that reach the process lifecycle or the notification boundary.
///
/// Per-file removal errors are plain `io::Error`s, logged where they happen.
#[derive(Debug, Error)]
pub enum CompanionError {
    #[error("watch directory does not exist: {}", .0.display())]
    MissingWatchDir(PathBuf),

    #[error("failed to watch '{}': {source}", path.display())]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("failed to send desktop notification: {0}")]
    Notification(String),

    /// The watch task panicked or was cancelled.
    #[error("observer task failed: {0}")]
    Observer(String),
}

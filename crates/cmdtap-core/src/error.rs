//! Error types for the cmdtap core library.

use thiserror::Error;

/// Result type alias using cmdtap Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for cmdtap operations.
///
/// A spawn failure is the only condition treated as a hard failure by the
/// multiplexer; a child that starts and then exits non-zero is ordinary data.
#[derive(Debug, Error)]
pub enum Error {
    /// The child process could not be started at all.
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// A stdio pipe was missing on the spawned child.
    #[error("Failed to capture {stream} pipe")]
    Pipe { stream: &'static str },

    /// A drainer or writer task died before it could be joined.
    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

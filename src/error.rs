//! Error types.
use thiserror::Error;

/// Errors that can occur outside of the estimation itself, which never fails.
///
/// Degenerate inputs such as zero samples are not errors, they yield NaN results.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// A well-formed argument outside of its domain.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// The name of the argument.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An invalid convergence study configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// (De-)serialization of a configuration or result file failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

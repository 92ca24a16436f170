//! Error types for the Legible library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LegibleError`] enum. Scoring itself never fails: empty input and text
//! without sentence terminators are ordinary inputs. Errors come from
//! configuration, the CLI input layer, and the pluggable rewrite path.
//!
//! # Examples
//!
//! ```
//! use legible::error::{LegibleError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LegibleError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Legible operations.
#[derive(Error, Debug)]
pub enum LegibleError {
    /// I/O errors (reading stdin, config files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenizer construction, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The external rewrite service failed or returned an unusable response
    #[error("Rewrite error: {0}")]
    Rewrite(String),

    /// The rewrite service has no credential to authenticate with
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Invalid argument errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LegibleError.
pub type Result<T> = std::result::Result<T, LegibleError>;

impl LegibleError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LegibleError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LegibleError::Analysis(msg.into())
    }

    /// Create a new rewrite error.
    pub fn rewrite<S: Into<String>>(msg: S) -> Self {
        LegibleError::Rewrite(msg.into())
    }

    /// Create a new missing credential error.
    pub fn missing_credential<S: Into<String>>(msg: S) -> Self {
        LegibleError::MissingCredential(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LegibleError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LegibleError::InvalidArgument(msg.into())
    }

    /// Whether the failure came from the optional rewrite path.
    ///
    /// Such failures are recoverable: the caller's text and analysis stay valid.
    pub fn is_rewrite_failure(&self) -> bool {
        matches!(
            self,
            LegibleError::Rewrite(_) | LegibleError::MissingCredential(_)
        )
    }
}

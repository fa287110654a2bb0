//! Error types for the Prosemeter library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`ProsemeterError`] enum. Constructor helpers keep call sites short.
//!
//! # Examples
//!
//! ```
//! use prosemeter::error::{ProsemeterError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ProsemeterError::config("stop word file missing"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Prosemeter operations.
#[derive(Error, Debug)]
pub enum ProsemeterError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (missing lexicon files, bad arguments, etc.)
    ///
    /// Fatal for the whole run: every document depends on the shared
    /// stop-word and sentiment configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering, scoring)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Input/output table errors (CSV parsing, missing columns, etc.)
    #[error("Table error: {0}")]
    Table(String),

    /// Per-document extraction errors (fetch failures, unreadable articles)
    ///
    /// Recoverable at the batch level: the document is skipped and its
    /// output row left unpopulated.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ProsemeterError.
pub type Result<T> = std::result::Result<T, ProsemeterError>;

impl ProsemeterError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ProsemeterError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ProsemeterError::Analysis(msg.into())
    }

    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        ProsemeterError::Table(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        ProsemeterError::Extraction(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ProsemeterError::Other(msg.into())
    }

    /// Whether this error aborts the whole batch or only one document.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ProsemeterError::Extraction(_))
    }
}

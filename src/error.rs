//! Error types for the emolex library.
//!
//! All errors are represented by the [`EmolexError`] enum. Library functions
//! return [`Result`], and the binary turns any error into a message on stderr
//! and a non-zero exit status.
//!
//! # Examples
//!
//! ```
//! use emolex::error::{EmolexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EmolexError::lexicon("missing 'word' column"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for emolex operations.
#[derive(Error, Debug)]
pub enum EmolexError {
    /// I/O errors (reading the text, creating the output directory, ...)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading and writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors (run summaries)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, normalization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lexicon loading errors (missing file, missing columns, bad rows)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Report building or writing errors
    #[error("Report error: {0}")]
    Report(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with EmolexError.
pub type Result<T> = std::result::Result<T, EmolexError>;

impl EmolexError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        EmolexError::Analysis(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        EmolexError::Lexicon(msg.into())
    }

    /// Create a new report error.
    pub fn report<S: Into<String>>(msg: S) -> Self {
        EmolexError::Report(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        EmolexError::Other(format!("Not found: {}", msg.into()))
    }
}

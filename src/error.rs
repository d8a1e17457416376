//! Error types for the logseek library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LogseekError`] enum. Recoverable per-row failures during ingestion are
//! not surfaced through this type; they are aggregated into the ingest
//! report instead (see [`crate::ingest::IngestReport`]).
//!
//! # Examples
//!
//! ```
//! use logseek::error::{LogseekError, Result};
//!
//! fn check_limit(top_k: usize) -> Result<()> {
//!     if top_k == 0 {
//!         return Err(LogseekError::invalid_argument("top_k must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_limit(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for logseek operations.
#[derive(Error, Debug)]
pub enum LogseekError {
    /// A document or source row is malformed (missing/empty required fields).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A document with the same event id already exists and the index is
    /// configured to reject duplicates.
    #[error("Duplicate document: {0}")]
    DuplicateDocument(String),

    /// The requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A caller-supplied parameter is invalid (e.g. non-positive top_k).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The source data cannot be decoded at all; fatal to the whole ingest.
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// A configured resource bound was exceeded.
    #[error("Capacity exceeded: {0}")]
    Capacity(String),

    /// Text analysis failed (tokenization, filtering).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with [`LogseekError`].
pub type Result<T> = std::result::Result<T, LogseekError>;

impl LogseekError {
    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        LogseekError::Validation(msg.into())
    }

    /// Create a new duplicate-document error.
    pub fn duplicate<S: Into<String>>(msg: S) -> Self {
        LogseekError::DuplicateDocument(msg.into())
    }

    /// Create a new not-found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LogseekError::NotFound(msg.into())
    }

    /// Create a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LogseekError::InvalidArgument(msg.into())
    }

    /// Create a new ingest error.
    pub fn ingest<S: Into<String>>(msg: S) -> Self {
        LogseekError::Ingest(msg.into())
    }

    /// Create a new capacity error.
    pub fn capacity<S: Into<String>>(msg: S) -> Self {
        LogseekError::Capacity(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LogseekError::Analysis(msg.into())
    }

    /// Whether this error is fatal to a whole ingest call, as opposed to a
    /// per-row failure that the pipeline recovers from.
    pub fn is_fatal_for_ingest(&self) -> bool {
        !matches!(
            self,
            LogseekError::Validation(_) | LogseekError::DuplicateDocument(_)
        )
    }
}

//! All error types for the localedit crate.
//!
//! These are returned from all fallible operations (loading, editing,
//! exporting). Every variant is recoverable at the caller: the store is left
//! in its last valid state.

use thiserror::Error;

use crate::store::LoadIssue;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "size limit exceeded: {} oversized file(s), {total_bytes} bytes measured in total",
        oversized.len()
    )]
    SizeLimit {
        /// Names of the files over the per-file budget.
        oversized: Vec<String>,
        /// Sum of the lengths of all files within the per-file budget.
        total_bytes: u64,
    },

    #[error("no input file could be parsed")]
    EmptyBatch { issues: Vec<LoadIssue> },

    #[error("locale `{0}` not found")]
    NotFound(String),

    #[error("nothing to do: {0}")]
    NoOp(String),

    #[error("a {0} operation is already in flight")]
    Busy(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write locale `{locale}`: {source}")]
    Write {
        locale: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new no-op error with a human-readable reason.
    pub fn no_op(reason: impl Into<String>) -> Self {
        Error::NoOp(reason.into())
    }

    /// Creates a new not-found error for a locale identifier.
    pub fn not_found(locale: impl Into<String>) -> Self {
        Error::NotFound(locale.into())
    }

    /// True for the non-fatal edit outcomes a caller may choose to ignore.
    pub fn is_no_op(&self) -> bool {
        matches!(self, Error::NoOp(_))
    }
}

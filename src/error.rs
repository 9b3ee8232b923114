//! Error types for the retrieval core.
//!
//! Every startup error here is a deterministic function of the static input
//! files, so there is no retry path anywhere: malformed input is surfaced
//! immediately and aborts startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// Malformed vector literal or corpus row. `line` is 1-based within the
    /// source file (the header line counts).
    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Caller contract violation (e.g. searching an empty index). Not
    /// user-recoverable; indicates a programming error.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An input file path could not be opened.
    #[error("resource not found: {path}: {source}")]
    ResourceNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed corpus row (CSV-level).
    #[error("corpus error: {0}")]
    Corpus(#[from] csv::Error),

    /// I/O failure while streaming an already-open file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BotError {
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse { line, reason: reason.into() }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for the retrieval core.
pub type Result<T> = std::result::Result<T, BotError>;

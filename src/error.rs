//! Error types for the summarizer.
//!
//! Degenerate documents (empty text, sentences with no countable terms) are
//! not errors; the pipeline absorbs them and yields a shorter or empty
//! summary. Only bad configuration, non-text input and I/O surface here.

/// Result type alias for summarizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the summarizer and its command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Language has no stopword list or stemmer
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Input is not text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CBOR encoding or decoding failed
    #[error("CBOR error: {0}")]
    Cbor(#[from] serde_cbor::Error),
}

//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum covering every fallible
//! operation in the library.
//!
//! # What can fail
//!
//! Parsing a transcript and running the analytics never fail: malformed input
//! yields empty or zero-valued results. Errors only come from the edges of the
//! library:
//!
//! - **Reading input** (I/O, invalid UTF-8)
//! - **Configuration** (bad date filters, invalid analysis settings)
//! - **Loading word lists** for the injectable lexicon
//! - **Writing output** (JSON, CSV)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when the transcript bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// Name of the offending setting
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A lexicon word list could not be read.
    #[error("Failed to load word list {}: {source}", path.display())]
    Lexicon {
        /// Path of the word list
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization or config parsing error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Creates a lexicon loading error.
    pub fn lexicon(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatlensError::Lexicon {
            path: path.into(),
            source,
        }
    }

    /// Creates a UTF-8 error with a description of what was being decoded.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatlensError::InvalidConfig { .. })
    }

    /// Returns `true` if this is a lexicon loading error.
    pub fn is_lexicon(&self) -> bool {
        matches!(self, ChatlensError::Lexicon { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ChatlensError::invalid_date("not-a-date");
        let display = err.to_string();
        assert!(display.contains("not-a-date"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = ChatlensError::invalid_config("heatmap_bucket_hours", "must divide 24");
        let display = err.to_string();
        assert!(display.contains("heatmap_bucket_hours"));
        assert!(display.contains("must divide 24"));
    }

    #[test]
    fn test_lexicon_error_display() {
        let err = ChatlensError::lexicon(
            "/lists/stop.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let display = err.to_string();
        assert!(display.contains("/lists/stop.txt"));
        assert!(display.contains("missing"));
    }

    #[test]
    fn test_utf8_error_display() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ChatlensError::utf8("reading transcript", utf8_err);
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("reading transcript"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatlensError::from(io_err);
        assert!(err.source().is_some());

        let err = ChatlensError::lexicon("x", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatlensError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_invalid_date());
        assert!(!io_err.is_invalid_config());

        let date_err = ChatlensError::invalid_date("bad");
        assert!(date_err.is_invalid_date());
        assert!(!date_err.is_io());

        let config_err = ChatlensError::invalid_config("top_words", "zero");
        assert!(config_err.is_invalid_config());
        assert!(!config_err.is_lexicon());
    }
}

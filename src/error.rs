//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum that covers every
//! failure the library can report. Aggregation never fails: only reading,
//! parsing, configuration and export can produce an error.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::RecordTable;
///
/// fn load() -> Result<RecordTable> {
///     chatstat::parse("")
/// }
/// # assert!(load().unwrap().is_empty());
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist or isn't valid UTF-8
    /// - Permission denied
    /// - Disk is full (when writing an export)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A header matched the timestamp pattern but is not a real date/time.
    ///
    /// The whole document is rejected; there are no partial results.
    #[error("Invalid timestamp {header:?} in message #{index}: {source}")]
    InvalidTimestamp {
        /// 0-based position of the message in the export
        index: usize,
        /// The header text that failed to parse
        header: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A configuration value is out of range or the config file is unreadable.
    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
        /// The config file, if one was involved
        path: Option<PathBuf>,
    },

    /// A scope named an empty sender.
    #[error("Invalid scope '{input}': sender name must not be empty")]
    InvalidScope {
        /// The rejected input
        input: String,
    },

    /// The output path has an extension chatstat can't write.
    #[error("Unsupported output format '{extension}'. Expected one of: {expected}")]
    UnsupportedFormat {
        /// The extension that was found
        extension: String,
        /// Comma-separated list of supported extensions
        expected: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization or config deserialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error while assembling in-memory output.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates an invalid timestamp error for the message at `index`.
    pub fn invalid_timestamp(
        index: usize,
        header: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        ChatstatError::InvalidTimestamp {
            index,
            header: header.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatstatError::InvalidConfig {
            message: message.into(),
            path,
        }
    }

    /// Creates an invalid scope error.
    pub fn invalid_scope(input: impl Into<String>) -> Self {
        ChatstatError::InvalidScope {
            input: input.into(),
        }
    }

    /// Creates an unsupported output format error.
    pub fn unsupported_format(extension: impl Into<String>, expected: &[&str]) -> Self {
        ChatstatError::UnsupportedFormat {
            extension: extension.into(),
            expected: expected.join(", "),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if this is a timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatstatError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatstatError::InvalidConfig { .. })
    }

    /// Returns `true` if this is a scope error.
    pub fn is_invalid_scope(&self) -> bool {
        matches!(self, ChatstatError::InvalidScope { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

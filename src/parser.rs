//! Export parser: raw chat text in, ordered [`RecordTable`] out.
//!
//! # How it works
//!
//! 1. Every message header (`05/03/24, 9:15 pm - `) is located; text before
//!    the first header is discarded.
//! 2. The body of each message is everything between the end of its header
//!    and the start of the next one, so multi-line messages stay whole.
//! 3. Each header is parsed into a timestamp. One bad header fails the whole
//!    document.
//! 4. Each body is split at its first `": "` into sender and text. Bodies
//!    without one are group events and get [`SYSTEM_SENDER`](crate::record::SYSTEM_SENDER).
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::ExportParser;
//!
//! let export = "05/03/24, 9:15 pm - Alice: hi\nthere\n05/03/24, 9:16 pm - Bob added Carol\n";
//! let table = ExportParser::new().parse_str(export)?;
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.records()[0].sender(), "Alice");
//! assert_eq!(table.records()[0].text(), "hi\nthere\n");
//! assert!(table.records()[1].is_system());
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::ParserConfig;
use crate::error::ChatstatError;
use crate::parsing::{find_headers, header_regex, sender_regex, split_sender};
use crate::record::{MessageRecord, RecordTable};

/// Parser for exported chat text.
///
/// Compiles its patterns once; reuse one instance for several exports.
#[derive(Debug, Clone)]
pub struct ExportParser {
    config: ParserConfig,
    header: Regex,
    sender: Regex,
}

impl ExportParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            header: header_regex(),
            sender: sender_regex(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses export text held in memory.
    ///
    /// Text without any header yields an empty table, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidTimestamp`] if any header is not a
    /// real date and time. No partial table is returned.
    pub fn parse_str(&self, content: &str) -> Result<RecordTable, ChatstatError> {
        let headers = find_headers(&self.header, content);
        tracing::debug!(headers = headers.len(), bytes = content.len(), "scanned export");

        let mut records = Vec::with_capacity(headers.len());

        for (index, header) in headers.iter().enumerate() {
            let timestamp = header
                .timestamp()
                .map_err(|e| ChatstatError::invalid_timestamp(index, header.raw, e))?;

            let body_end = headers.get(index + 1).map_or(content.len(), |next| next.start);
            let body = &content[header.end..body_end];

            let record = match split_sender(&self.sender, body) {
                Some(split) => MessageRecord::new(timestamp, split.sender, split.text),
                None if self.config.skip_system_events => continue,
                None => MessageRecord::system(timestamp, body),
            };
            records.push(record);
        }

        tracing::debug!(records = records.len(), "parsed export");
        Ok(RecordTable::from(records))
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file can't be read as UTF-8, or
    /// any error from [`parse_str`](Self::parse_str).
    pub fn parse_file(&self, path: &Path) -> Result<RecordTable, ChatstatError> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "read export file");
        self.parse_str(&content)
    }
}

impl Default for ExportParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses export text with the default configuration.
///
/// Shorthand for `ExportParser::new().parse_str(content)`.
pub fn parse(content: &str) -> Result<RecordTable, ChatstatError> {
    ExportParser::new().parse_str(content)
}

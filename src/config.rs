//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how the export is turned into records
//! - [`AnalysisConfig`] - knobs for the aggregations
//! - [`EmojiScan`] - how message text is scanned for emoji
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, EmojiScan};
//!
//! let config = AnalysisConfig::new()
//!     .with_emoji_scan(EmojiScan::Codepoint)
//!     .with_busy_users_limit(10);
//!
//! assert_eq!(config.busy_users_limit, 10);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChatstatError;

/// Default length of the busiest-senders leaderboard.
pub const DEFAULT_BUSY_USERS_LIMIT: usize = 5;

/// Configuration for export parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_system_events(true);
/// assert!(config.skip_system_events);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Drop group events (records without a sender prefix) (default: false)
    pub skip_system_events: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to drop group events.
    #[must_use]
    pub fn with_skip_system_events(mut self, skip: bool) -> Self {
        self.skip_system_events = skip;
        self
    }
}

/// How emoji are found in message text.
///
/// Many emoji are sequences of several code points: skin tones
/// (`👍🏽`), ZWJ families (`👨‍👩‍👧`), flags (`🇯🇵`). Scanning code point by
/// code point splits them into their parts, or misses them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiScan {
    /// Check each extended grapheme cluster; sequences count once.
    #[default]
    Grapheme,

    /// Check each code point on its own.
    Codepoint,
}

impl fmt::Display for EmojiScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmojiScan::Grapheme => write!(f, "grapheme"),
            EmojiScan::Codepoint => write!(f, "codepoint"),
        }
    }
}

/// Configuration for the aggregations.
///
/// Can be loaded from a JSON file; missing fields keep their defaults:
///
/// ```json
/// { "emoji_scan": "codepoint", "busy_users_limit": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Emoji scanning mode (default: grapheme)
    pub emoji_scan: EmojiScan,

    /// Number of senders in the busiest-users leaderboard (default: 5)
    pub busy_users_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            emoji_scan: EmojiScan::default(),
            busy_users_limit: DEFAULT_BUSY_USERS_LIMIT,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the emoji scanning mode.
    #[must_use]
    pub fn with_emoji_scan(mut self, scan: EmojiScan) -> Self {
        self.emoji_scan = scan;
        self
    }

    /// Sets the leaderboard length.
    #[must_use]
    pub fn with_busy_users_limit(mut self, limit: usize) -> Self {
        self.busy_users_limit = limit;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ChatstatError> {
        if self.busy_users_limit == 0 {
            return Err(ChatstatError::invalid_config(
                "busy_users_limit must be at least 1",
                None,
            ));
        }
        Ok(())
    }

    /// Loads and validates a configuration from a JSON file.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, ChatstatError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ChatstatError::invalid_config(e.to_string(), Some(path.to_path_buf()))
        })?;
        config.validate().map_err(|e| match e {
            ChatstatError::InvalidConfig { message, .. } => {
                ChatstatError::invalid_config(message, Some(path.to_path_buf()))
            }
            other => other,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded analysis config");
        Ok(config)
    }
}

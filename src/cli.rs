//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - how the report is printed
//! - [`ScanMode`] - emoji scanning mode as a CLI value
//!
//! Turning arguments into library types ([`Scope`], [`ParserConfig`],
//! [`AnalysisConfig`]) lives here too, so the binary stays a thin driver.
//!
//! # Example
//!
//! ```rust
//! use chatstat::cli::Args;
//! use chatstat::core::Scope;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstat", "chat.txt", "--user", "Alice", "--top", "3"]);
//! assert_eq!(args.scope().unwrap(), Scope::sender("Alice"));
//! assert_eq!(args.analysis_config().unwrap().busy_users_limit, 3);
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, EmojiScan, ParserConfig};
use crate::core::Scope;
use crate::error::ChatstatError;

/// Activity statistics for exported WhatsApp chats: busiest senders,
/// timelines, word and emoji frequency.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --user Alice
    chatstat chat.txt --format json > report.json
    chatstat chat.txt --users
    chatstat chat.txt --export records.csv
    chatstat chat.txt --emoji-scan codepoint -vv")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Analyze a single sender instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// How to print the report
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Number of senders in the busiest-users leaderboard
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Emoji scanning mode
    #[arg(long, value_enum, value_name = "MODE")]
    pub emoji_scan: Option<ScanMode>,

    /// JSON file with analysis settings; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Drop group events (joins, leaves, subject changes) while parsing
    #[arg(long)]
    pub skip_system: bool,

    /// Write the parsed records to FILE (.csv, .json, .jsonl) instead of printing a report
    #[arg(long, value_name = "FILE")]
    pub export: Option<String>,

    /// List the senders found in the chat and exit
    #[arg(long)]
    pub users: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The scope selected by `--user`, [`Scope::Overall`] without it.
    ///
    /// `--user Overall` also selects the whole chat.
    pub fn scope(&self) -> Result<Scope, ChatstatError> {
        match &self.user {
            Some(name) => name.parse(),
            None => Ok(Scope::Overall),
        }
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_skip_system_events(self.skip_system)
    }

    /// Analysis settings: defaults, then `--config`, then individual flags.
    pub fn analysis_config(&self) -> Result<AnalysisConfig, ChatstatError> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(std::path::Path::new(path))?,
            None => AnalysisConfig::default(),
        };

        if let Some(top) = self.top {
            config = config.with_busy_users_limit(top);
        }
        if let Some(mode) = self.emoji_scan {
            config = config.with_emoji_scan(mode.into());
        }

        config.validate()?;
        Ok(config)
    }

    /// `tracing` filter directive for the `-v` count.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Report output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable sections (default)
    #[default]
    Text,

    /// The full report as pretty-printed JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Emoji scanning mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ScanMode {
    /// Whole grapheme clusters (skin tones, flags, ZWJ sequences)
    #[value(alias = "cluster")]
    Grapheme,

    /// Single code points
    #[value(alias = "char")]
    Codepoint,
}

// Conversion to library scan mode
impl From<ScanMode> for EmojiScan {
    fn from(mode: ScanMode) -> EmojiScan {
        match mode {
            ScanMode::Grapheme => EmojiScan::Grapheme,
            ScanMode::Codepoint => EmojiScan::Codepoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["chatstat", "chat.txt"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.input, "chat.txt");
        assert_eq!(args.format, ReportFormat::Text);
        assert_eq!(args.scope().unwrap(), Scope::Overall);
        assert_eq!(args.analysis_config().unwrap(), AnalysisConfig::default());
        assert!(!args.parser_config().skip_system_events);
        assert!(!args.users);
        assert!(args.export.is_none());
    }

    #[test]
    fn test_user_scope() {
        assert_eq!(args(&["-u", "Bob"]).scope().unwrap(), Scope::sender("Bob"));
        assert_eq!(args(&["--user", "Overall"]).scope().unwrap(), Scope::Overall);
        assert!(args(&["--user", "  "]).scope().unwrap_err().is_invalid_scope());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = args(&["--top", "2", "--emoji-scan", "char"])
            .analysis_config()
            .unwrap();
        assert_eq!(config.busy_users_limit, 2);
        assert_eq!(config.emoji_scan, EmojiScan::Codepoint);
    }

    #[test]
    fn test_zero_top_is_rejected() {
        let err = args(&["--top", "0"]).analysis_config().unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        std::fs::write(&path, r#"{"emoji_scan": "codepoint", "busy_users_limit": 7}"#).unwrap();
        let path = path.to_str().unwrap();

        let config = args(&["--config", path]).analysis_config().unwrap();
        assert_eq!(config.busy_users_limit, 7);
        assert_eq!(config.emoji_scan, EmojiScan::Codepoint);

        let config = args(&["--config", path, "--top", "1"]).analysis_config().unwrap();
        assert_eq!(config.busy_users_limit, 1);
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(args(&[]).log_directive(), "warn");
        assert_eq!(args(&["-v"]).log_directive(), "info");
        assert_eq!(args(&["-vv"]).log_directive(), "debug");
        assert_eq!(args(&["-vvvv"]).log_directive(), "trace");
    }

    #[test]
    fn test_report_format_serde() {
        let json = serde_json::to_string(&ReportFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        assert_eq!(ReportFormat::Text.to_string(), "Text");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Args::try_parse_from(["chatstat", "chat.txt", "--format", "xml"]).is_err());
        assert!(Args::try_parse_from(["chatstat", "chat.txt", "--emoji-scan", "bytes"]).is_err());
        assert!(Args::try_parse_from(["chatstat"]).is_err());
    }
}

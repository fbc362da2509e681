//! # Chatstat
//!
//! A Rust library for parsing exported WhatsApp group chats and computing
//! activity statistics over them.
//!
//! ## Overview
//!
//! Chatstat turns the plain-text export of a chat into an ordered table of
//! message records, then answers questions about it:
//! - **Headline counts**: messages, words, shared media, links
//! - **Leaderboard**: the busiest senders and everyone's share
//! - **Text**: word and emoji frequency
//! - **Time**: monthly and daily timelines, weekday and month activity
//!
//! Every question can be asked about the whole chat or about one sender.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "\
//! 05/03/24, 9:15 pm - Alice: see https://example.com
//! 05/03/24, 9:16 pm - Bob: <Media omitted>
//! 06/03/24, 10:02 am - Alice: 🎉🎉
//! ";
//!     let table = parse(export)?;
//!
//!     let stats = fetch_stats(&Scope::Overall, &table, &UrlExtractor::new());
//!     assert_eq!(stats.message_count, 3);
//!     assert_eq!(stats.media_count, 1);
//!     assert_eq!(stats.link_count, 1);
//!
//!     let busy = most_busy_users(&table);
//!     assert_eq!(busy.top[0].sender, "Alice");
//!
//!     // Or everything at once
//!     let report = Analyzer::new().report(&Scope::sender("Alice"), &table);
//!     assert_eq!(report.emoji[0].count, 2);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ExportParser`](parser::ExportParser), [`parse`]
//! - [`parsing`] - header and sender building blocks used by the parser
//! - [`record`] - [`MessageRecord`], [`RecordTable`]
//! - [`core`] - the aggregations, [`Scope`](core::Scope), record writers
//! - [`report`] - [`Analyzer`](report::Analyzer) and [`Report`](report::Report)
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) for record export
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`error`] - unified error types ([`ChatstatError`], [`Result`])
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use parser::parse;
pub use record::{MessageRecord, RecordTable};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::record::{MEDIA_PLACEHOLDER, MessageRecord, RecordTable, SYSTEM_SENDER};

    // Error types
    pub use crate::error::{ChatstatError, Result};

    // Parsing
    pub use crate::parser::{ExportParser, parse};

    // Configuration
    pub use crate::config::{AnalysisConfig, EmojiScan, ParserConfig};

    // Aggregations
    pub use crate::core::{
        Scope, UrlExtractor, busy_users, create_word_frequency_corpus, daily_timeline,
        fetch_stats, month_activity_map, monthly_timeline, most_busy_users, most_common_emoji,
        week_activity_map,
    };

    // Facade
    pub use crate::report::{Analyzer, Report};

    // Record export
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}

//! Aggregations over a parsed [`RecordTable`](crate::record::RecordTable).
//!
//! This module contains:
//! - [`scope`] - [`Scope`]: the whole chat or one sender
//! - [`links`] - [`UrlExtractor`] for link counting
//! - [`stats`] - [`fetch_stats`], [`most_busy_users`]
//! - [`text`] - [`create_word_frequency_corpus`], [`most_common_emoji`]
//! - [`timeline`] - [`monthly_timeline`], [`daily_timeline`],
//!   [`week_activity_map`], [`month_activity_map`]
//! - [`output`] - record table writers (CSV, JSON, JSONL)
//!
//! Every aggregation is a pure function of a scope and a table. None of them
//! fail: an empty table or an unknown sender gives zero counts and empty
//! lists.
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::config::EmojiScan;
//! use chatstat::core::{
//!     Scope, UrlExtractor, fetch_stats, most_busy_users, most_common_emoji, monthly_timeline,
//! };
//!
//! let table = chatstat::parse("01/01/24, 9:00 am - Ann: hi 👋\n02/01/24, 9:00 am - Ben: yo\n")?;
//!
//! let stats = fetch_stats(&Scope::Overall, &table, &UrlExtractor::new());
//! assert_eq!(stats.message_count, 2);
//!
//! let busy = most_busy_users(&table);
//! assert_eq!(busy.top.len(), 2);
//!
//! let emoji = most_common_emoji(&Scope::sender("Ann"), &table, EmojiScan::Grapheme);
//! assert_eq!(emoji[0].emoji, "👋");
//!
//! assert_eq!(monthly_timeline(&Scope::Overall, &table)[0].composite_label, "January-2024");
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use std::collections::HashMap;

pub mod links;
pub mod output;
pub mod scope;
pub mod stats;
pub mod text;
pub mod timeline;

pub use links::UrlExtractor;
pub use scope::{OVERALL, Scope};
pub use stats::{
    BusyUsers, MessageStats, SenderCount, SenderShare, busy_users, fetch_stats, most_busy_users,
};
pub use text::{
    EmojiCount, WordCorpus, WordWeight, create_word_frequency_corpus, most_common_emoji,
};
pub use timeline::{
    DailyPoint, MonthActivity, MonthlyPoint, WeekdayActivity, daily_timeline, month_activity_map,
    monthly_timeline, week_activity_map,
};

/// Counts items, most frequent first, ties in order of first appearance.
pub(crate) fn count_descending<'a>(items: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for item in items {
        match index.get(item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

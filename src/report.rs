//! One-stop analysis: every aggregation for a scope in a single call.
//!
//! [`Analyzer`] owns the pieces the free functions in [`core`](crate::core)
//! take as arguments (the URL extractor, the emoji scan mode and the
//! leaderboard length) and builds them once.
//!
//! # Example
//!
//! ```rust
//! use chatstat::core::Scope;
//! use chatstat::report::Analyzer;
//!
//! let table = chatstat::parse(
//!     "01/01/24, 9:00 am - Ann: see https://x.co 🎉\n01/01/24, 9:05 am - Ben: nice\n",
//! )?;
//!
//! let report = Analyzer::new().report(&Scope::Overall, &table);
//! assert_eq!(report.stats.message_count, 2);
//! assert_eq!(report.stats.link_count, 1);
//! assert_eq!(report.emoji[0].emoji, "🎉");
//! assert!(report.busy_users.is_some());
//!
//! let ann = Analyzer::new().report(&Scope::sender("Ann"), &table);
//! assert!(ann.busy_users.is_none());
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::{
    self, BusyUsers, DailyPoint, EmojiCount, MessageStats, MonthActivity, MonthlyPoint, Scope,
    UrlExtractor, WeekdayActivity, WordCorpus,
};
use crate::record::RecordTable;

/// Runs aggregations with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
    urls: UrlExtractor,
}

impl Analyzer {
    /// Creates an analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            urls: UrlExtractor::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn fetch_stats(&self, scope: &Scope, table: &RecordTable) -> MessageStats {
        core::fetch_stats(scope, table, &self.urls)
    }

    /// Leaderboard over the whole table, `busy_users_limit` entries long.
    pub fn most_busy_users(&self, table: &RecordTable) -> BusyUsers {
        core::busy_users(table, self.config.busy_users_limit)
    }

    pub fn create_word_frequency_corpus(&self, scope: &Scope, table: &RecordTable) -> WordCorpus {
        core::create_word_frequency_corpus(scope, table)
    }

    pub fn most_common_emoji(&self, scope: &Scope, table: &RecordTable) -> Vec<EmojiCount> {
        core::most_common_emoji(scope, table, self.config.emoji_scan)
    }

    pub fn monthly_timeline(&self, scope: &Scope, table: &RecordTable) -> Vec<MonthlyPoint> {
        core::monthly_timeline(scope, table)
    }

    pub fn daily_timeline(&self, scope: &Scope, table: &RecordTable) -> Vec<DailyPoint> {
        core::daily_timeline(scope, table)
    }

    pub fn week_activity_map(&self, scope: &Scope, table: &RecordTable) -> Vec<WeekdayActivity> {
        core::week_activity_map(scope, table)
    }

    pub fn month_activity_map(&self, scope: &Scope, table: &RecordTable) -> Vec<MonthActivity> {
        core::month_activity_map(scope, table)
    }

    /// Runs every aggregation for `scope`.
    ///
    /// The busiest-users leaderboard describes the whole chat, so it is only
    /// filled in for [`Scope::Overall`].
    pub fn report(&self, scope: &Scope, table: &RecordTable) -> Report {
        let report = Report {
            scope: scope.to_string(),
            stats: self.fetch_stats(scope, table),
            busy_users: scope.is_overall().then(|| self.most_busy_users(table)),
            words: self.create_word_frequency_corpus(scope, table),
            emoji: self.most_common_emoji(scope, table),
            monthly_timeline: self.monthly_timeline(scope, table),
            daily_timeline: self.daily_timeline(scope, table),
            week_activity: self.week_activity_map(scope, table),
            month_activity: self.month_activity_map(scope, table),
        };
        tracing::debug!(
            scope = %report.scope,
            messages = report.stats.message_count,
            "built report"
        );
        report
    }
}

/// Every aggregation for one scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// `"Overall"` or the sender name.
    pub scope: String,
    pub stats: MessageStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub words: WordCorpus,
    pub emoji: Vec<EmojiCount>,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Vec<WeekdayActivity>,
    pub month_activity: Vec<MonthActivity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmojiScan;
    use crate::parse;

    const EXPORT: &str = "\
01/01/24, 9:00 am - Alice: hi 👍🏽 www.example.com
01/01/24, 9:01 am - Bob: hello
02/01/24, 9:02 am - Carol: hey
02/01/24, 9:03 am - Alice: bye
";

    #[test]
    fn test_report_matches_free_functions() {
        let table = parse(EXPORT).unwrap();
        let analyzer = Analyzer::new();
        let report = analyzer.report(&Scope::Overall, &table);

        assert_eq!(
            report.stats,
            core::fetch_stats(&Scope::Overall, &table, &UrlExtractor::new())
        );
        assert_eq!(report.busy_users, Some(core::most_busy_users(&table)));
        assert_eq!(report.daily_timeline.len(), 2);
        assert_eq!(report.month_activity[0].message_count, 4);
    }

    #[test]
    fn test_report_scope_label() {
        let table = parse(EXPORT).unwrap();
        let analyzer = Analyzer::new();
        assert_eq!(analyzer.report(&Scope::Overall, &table).scope, "Overall");
        assert_eq!(analyzer.report(&Scope::sender("Bob"), &table).scope, "Bob");
    }

    #[test]
    fn test_config_flows_through() {
        let table = parse(EXPORT).unwrap();
        let analyzer = Analyzer::with_config(
            AnalysisConfig::new()
                .with_busy_users_limit(1)
                .with_emoji_scan(EmojiScan::Codepoint),
        );

        let busy = analyzer.most_busy_users(&table);
        assert_eq!(busy.top.len(), 1);
        assert_eq!(busy.top[0].sender, "Alice");
        assert_eq!(busy.percentages.len(), 3);

        let emoji = analyzer.most_common_emoji(&Scope::Overall, &table);
        assert_eq!(emoji[0].emoji, "👍");
    }

    #[test]
    fn test_report_on_empty_table() {
        let report = Analyzer::new().report(&Scope::Overall, &RecordTable::default());
        assert_eq!(report.stats, MessageStats::default());
        assert!(report.words.is_empty());
        assert!(report.emoji.is_empty());
        assert!(report.monthly_timeline.is_empty());
        assert_eq!(report.busy_users, Some(BusyUsers::default()));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_report_serializes() {
        let table = parse(EXPORT).unwrap();
        let report = Analyzer::new().report(&Scope::sender("Alice"), &table);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["scope"], "Alice");
        assert_eq!(value["stats"]["message_count"], 2);
        assert_eq!(value["stats"]["link_count"], 1);
        assert!(value.get("busy_users").is_none());
        assert_eq!(value["daily_timeline"][0]["calendar_date"], "2024-01-01");
    }
}

//! Parsed message records and the table that holds them.
//!
//! A [`MessageRecord`] is one message block from the export: who sent it, what
//! they wrote, and when, with the calendar fields every aggregation groups by
//! already derived. A [`RecordTable`] is the ordered, read-only collection the
//! parser produces and every aggregation reads.
//!
//! # Examples
//!
//! ```
//! use chatstat::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
//!     .unwrap()
//!     .and_hms_opt(21, 15, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, "Alice", "hello\n");
//!
//! assert_eq!(record.year(), 2024);
//! assert_eq!(record.month_name(), "March");
//! assert_eq!(record.weekday_name(), "Tuesday");
//! assert_eq!(record.hour(), 21);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::core::scope::Scope;

/// Sender used for blocks that carry no `"<name>: "` prefix.
///
/// Group events ("X added Y", encryption notices, subject changes) end up here.
pub const SYSTEM_SENDER: &str = "group_notification";

/// Text the export writes in place of an attached file.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// One parsed message.
///
/// All calendar fields are derived from `timestamp` inside [`MessageRecord::new`]
/// and cannot be set independently, so `month_number`/`month_name` and
/// `calendar_date`/`timestamp` always agree.
///
/// # Serialization
///
/// Serializes with the column names the presentation layer binds to:
/// `timestamp`, `year`, `month_number`, `month_name`, `day_of_month`,
/// `weekday_name`, `calendar_date`, `hour`, `minute`, `sender`, `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    year: i32,
    month_number: u32,
    month_name: String,
    day_of_month: u32,
    weekday_name: String,
    calendar_date: NaiveDate,
    hour: u32,
    minute: u32,
    sender: String,
    text: String,
}

impl MessageRecord {
    /// Builds a record, deriving every calendar field from `timestamp`.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            year: timestamp.year(),
            month_number: timestamp.month(),
            month_name: timestamp.format("%B").to_string(),
            day_of_month: timestamp.day(),
            weekday_name: timestamp.format("%A").to_string(),
            calendar_date: timestamp.date(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Builds a group event record attributed to [`SYSTEM_SENDER`].
    pub fn system(timestamp: NaiveDateTime, text: impl Into<String>) -> Self {
        Self::new(timestamp, SYSTEM_SENDER, text)
    }

    /// When the message was sent (minute precision, no time zone).
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month as 1-12.
    pub fn month_number(&self) -> u32 {
        self.month_number
    }

    /// Full English month name, e.g. `"January"`.
    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    pub fn day_of_month(&self) -> u32 {
        self.day_of_month
    }

    /// Full English weekday name, e.g. `"Monday"`.
    pub fn weekday_name(&self) -> &str {
        &self.weekday_name
    }

    /// The timestamp truncated to the day.
    pub fn calendar_date(&self) -> NaiveDate {
        self.calendar_date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Username, or [`SYSTEM_SENDER`] for group events.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Message body with the sender prefix removed.
    ///
    /// Kept exactly as it appeared in the export, including the line break
    /// that separated it from the next header.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` for group events with no human sender.
    pub fn is_system(&self) -> bool {
        self.sender == SYSTEM_SENDER
    }

    /// Returns `true` if the body is the media placeholder.
    ///
    /// The trailing line terminator is ignored; nothing else is.
    pub fn is_media(&self) -> bool {
        self.text.trim_end_matches(['\r', '\n']) == MEDIA_PLACEHOLDER
    }
}

/// The ordered result of parsing one export.
///
/// Insertion order is chat order. The table has no mutating API: it is built
/// once by the parser and then only read, so every aggregation sees the same
/// rows no matter what ran before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordTable {
    records: Vec<MessageRecord>,
}

impl RecordTable {
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows visible to `scope`, in chat order.
    ///
    /// [`Scope::Overall`] yields every row; a sender scope yields only that
    /// sender's rows (possibly none).
    pub fn scoped<'a>(&'a self, scope: &'a Scope) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        self.records.iter().filter(move |r| scope.includes(r.sender()))
    }

    /// Unique human senders, sorted ascending. The system sentinel is left out.
    pub fn senders(&self) -> Vec<&str> {
        let mut senders: Vec<&str> = self
            .records
            .iter()
            .filter(|r| !r.is_system())
            .map(MessageRecord::sender)
            .collect();
        senders.sort_unstable();
        senders.dedup();
        senders
    }
}

impl From<Vec<MessageRecord>> for RecordTable {
    fn from(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<MessageRecord> for RecordTable {
    fn from_iter<I: IntoIterator<Item = MessageRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

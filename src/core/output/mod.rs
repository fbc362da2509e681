//! Record table writers.
//!
//! This module writes the parsed [`RecordTable`](crate::record::RecordTable)
//! row by row, one row per message, with the record column names:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! Timestamps are written as `%Y-%m-%d %H:%M` and calendar dates as
//! `%Y-%m-%d` in every format.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_csv, write_json, write_jsonl};
//!
//! let table = chatstat::parse("05/03/24, 9:15 pm - Alice: hi\n")?;
//!
//! write_json(&table, "records.json")?;
//! write_jsonl(&table, "records.jsonl")?;
//!
//! let csv_string = to_csv(&table)?;
//! assert!(csv_string.starts_with("timestamp;year;"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use serde::Serialize;

#[cfg(any(feature = "csv-output", feature = "json-output"))]
use crate::record::MessageRecord;

/// Column names, in output order.
pub const COLUMNS: [&str; 11] = [
    "timestamp",
    "year",
    "month_number",
    "month_name",
    "day_of_month",
    "weekday_name",
    "calendar_date",
    "hour",
    "minute",
    "sender",
    "text",
];

#[cfg(any(feature = "csv-output", feature = "json-output"))]
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
#[cfg(any(feature = "csv-output", feature = "json-output"))]
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One record flattened for writing.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
#[derive(Serialize)]
pub(crate) struct ExportRow<'a> {
    timestamp: String,
    year: i32,
    month_number: u32,
    month_name: &'a str,
    day_of_month: u32,
    weekday_name: &'a str,
    calendar_date: String,
    hour: u32,
    minute: u32,
    sender: &'a str,
    text: &'a str,
}

#[cfg(any(feature = "csv-output", feature = "json-output"))]
impl<'a> ExportRow<'a> {
    pub(crate) fn from_record(record: &'a MessageRecord) -> Self {
        Self {
            timestamp: record.timestamp().format(TIMESTAMP_FORMAT).to_string(),
            year: record.year(),
            month_number: record.month_number(),
            month_name: record.month_name(),
            day_of_month: record.day_of_month(),
            weekday_name: record.weekday_name(),
            calendar_date: record.calendar_date().format(DATE_FORMAT).to_string(),
            hour: record.hour(),
            minute: record.minute(),
            sender: record.sender(),
            text: record.text(),
        }
    }
}

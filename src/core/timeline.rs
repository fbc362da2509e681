//! Activity over time: per-month and per-day timelines plus weekday and month
//! activity maps.
//!
//! Timelines are in calendar order. Activity maps are busiest first, ties in
//! order of first appearance.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::count_descending;
use crate::core::scope::Scope;
use crate::record::RecordTable;

/// Message count for one calendar month of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_number: u32,
    pub month_name: String,
    /// `"<month_name>-<year>"`, e.g. `"March-2024"`.
    pub composite_label: String,
    pub message_count: usize,
}

/// Message count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    #[serde(serialize_with = "serialize_date")]
    pub calendar_date: NaiveDate,
    pub message_count: usize,
}

/// Message count for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayActivity {
    pub weekday_name: String,
    pub message_count: usize,
}

/// Message count for one month name, all years together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthActivity {
    pub month_name: String,
    pub message_count: usize,
}

/// Messages per (year, month), oldest first.
///
/// Months without messages are not listed. January 2023 and January 2024
/// are separate points.
///
/// # Example
///
/// ```rust
/// use chatstat::core::{Scope, monthly_timeline};
///
/// let table = chatstat::parse(
///     "31/01/24, 9:00 am - Ann: a\n01/02/24, 9:00 am - Ann: b\n15/02/24, 9:00 am - Ben: c\n",
/// )?;
/// let timeline = monthly_timeline(&Scope::Overall, &table);
///
/// assert_eq!(timeline.len(), 2);
/// assert_eq!(timeline[1].composite_label, "February-2024");
/// assert_eq!(timeline[1].message_count, 2);
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn monthly_timeline(scope: &Scope, table: &RecordTable) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();
    for record in table.scoped(scope) {
        months
            .entry((record.year(), record.month_number()))
            .or_insert((record.month_name(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_number), (month_name, message_count))| MonthlyPoint {
            year,
            month_number,
            month_name: month_name.to_string(),
            composite_label: format!("{month_name}-{year}"),
            message_count,
        })
        .collect()
}

/// Messages per calendar day, oldest first. Days without messages are not
/// listed.
pub fn daily_timeline(scope: &Scope, table: &RecordTable) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in table.scoped(scope) {
        *days.entry(record.calendar_date()).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(calendar_date, message_count)| DailyPoint {
            calendar_date,
            message_count,
        })
        .collect()
}

/// Messages per weekday name, busiest first.
pub fn week_activity_map(scope: &Scope, table: &RecordTable) -> Vec<WeekdayActivity> {
    count_descending(table.scoped(scope).map(|r| r.weekday_name()))
        .into_iter()
        .map(|(weekday_name, message_count)| WeekdayActivity {
            weekday_name: weekday_name.to_string(),
            message_count,
        })
        .collect()
}

/// Messages per month name, busiest first. Years are not distinguished.
pub fn month_activity_map(scope: &Scope, table: &RecordTable) -> Vec<MonthActivity> {
    count_descending(table.scoped(scope).map(|r| r.month_name()))
        .into_iter()
        .map(|(month_name, message_count)| MonthActivity {
            month_name: month_name.to_string(),
            message_count,
        })
        .collect()
}

fn serialize_date<S: serde::Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

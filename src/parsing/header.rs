//! Message header detection and timestamp parsing.
//!
//! Every message in the export starts with a header like
//! `05/03/24, 9:15 pm - `: two-digit day, month and year, a 12-hour clock
//! time and a lowercase meridiem, followed by a dash. The header is the only
//! reliable message boundary; message bodies may span several lines.

use chrono::NaiveDateTime;
use regex::Regex;

/// The header pattern, with capture groups for date, time and meridiem.
///
/// `\s` accepts any Unicode whitespace, so exports that put a narrow
/// no-break space (U+202F) before `am`/`pm` still match.
pub const HEADER_PATTERN: &str = r"(\d{2}/\d{2}/\d{2}),\s(\d{1,2}:\d{2})\s([ap]m)\s-\s";

/// chrono format for the normalised `"<date>, <time> <meridiem>"` string.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %I:%M %p";

/// Compiles [`HEADER_PATTERN`].
pub fn header_regex() -> Regex {
    // Constant pattern, exercised by every parser test.
    Regex::new(HEADER_PATTERN).unwrap()
}

/// One header found in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// The full matched header, including the trailing `" - "`.
    pub raw: &'a str,
    /// Byte offset where the header starts.
    pub start: usize,
    /// Byte offset just past the header; the message body starts here.
    pub end: usize,
    pub date: &'a str,
    pub time: &'a str,
    pub meridiem: &'a str,
}

impl Header<'_> {
    /// Parses the header into a timestamp.
    pub fn timestamp(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        parse_header_timestamp(self.date, self.time, self.meridiem)
    }
}

/// Finds every header in `content`, in order.
pub fn find_headers<'a>(regex: &Regex, content: &'a str) -> Vec<Header<'a>> {
    regex
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Header {
                raw: whole.as_str(),
                start: whole.start(),
                end: whole.end(),
                date: caps.get(1)?.as_str(),
                time: caps.get(2)?.as_str(),
                meridiem: caps.get(3)?.as_str(),
            })
        })
        .collect()
}

/// Parses header captures into a timestamp.
///
/// There is no lenient fallback: a date that doesn't exist (`31/02/24`) or an
/// hour outside 1-12 is an error.
pub fn parse_header_timestamp(
    date: &str,
    time: &str,
    meridiem: &str,
) -> Result<NaiveDateTime, chrono::ParseError> {
    let normalised = format!("{date}, {time} {meridiem}");
    NaiveDateTime::parse_from_str(&normalised, TIMESTAMP_FORMAT)
}

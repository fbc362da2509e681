//! Low-level pieces of the export parser.
//!
//! - [`header`] - finding message headers and turning them into timestamps
//! - [`sender`] - splitting a message body into sender and text
//!
//! Most users want [`ExportParser`](crate::parser::ExportParser) instead.

pub mod header;
pub mod sender;

pub use header::{Header, find_headers, header_regex, parse_header_timestamp};
pub use sender::{SenderSplit, sender_regex, split_sender};

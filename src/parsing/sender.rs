//! Splitting a message body into sender and text.

use regex::Regex;

/// Shortest prefix ending in `": "`, anchored at the start of the body.
///
/// `[\s\S]` lets the prefix cross line breaks and the lazy `+?` stops at the
/// first colon-whitespace pair, so the rest of a multi-line message stays in
/// the text untouched.
pub const SENDER_PATTERN: &str = r"^([\s\S]+?):\s";

/// Compiles [`SENDER_PATTERN`].
pub fn sender_regex() -> Regex {
    // Constant pattern, exercised by every parser test.
    Regex::new(SENDER_PATTERN).unwrap()
}

/// A body with its sender prefix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenderSplit<'a> {
    pub sender: &'a str,
    pub text: &'a str,
}

/// Splits `"<name>: <text>"` into its parts.
///
/// Returns `None` when the body has no `": "` at all; the caller decides what
/// sender such a body gets.
pub fn split_sender<'a>(regex: &Regex, body: &'a str) -> Option<SenderSplit<'a>> {
    let caps = regex.captures(body)?;
    let sender = caps.get(1)?.as_str();
    let text = &body[caps.get(0)?.end()..];
    Some(SenderSplit { sender, text })
}

//! URL detection for link counting.
//!
//! [`UrlExtractor`] sets up its finder once; build one per process (the
//! [`Analyzer`](crate::report::Analyzer) does) and pass it to
//! [`fetch_stats`](crate::core::stats::fetch_stats).
//!
//! Detected forms:
//! - anything with a scheme: `http://`, `https://`, `ftp://`
//! - bare hosts whose last label is a public suffix: `www.rust-lang.org`,
//!   `youtu.be/dQw4w9WgXcQ`, `t.me/rustlang`
//!
//! Trailing sentence punctuation and unbalanced brackets are not part of a
//! URL, and domains directly after `@` (e-mail addresses) are skipped.

use std::fmt;

use linkify::{LinkFinder, LinkKind};

/// Finds URLs in free text.
pub struct UrlExtractor {
    finder: LinkFinder,
}

impl UrlExtractor {
    /// Creates a finder for URLs with or without a scheme.
    pub fn new() -> Self {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]).url_must_have_scheme(false);
        Self { finder }
    }

    /// Returns every URL in `text`, in order of appearance.
    pub fn find_urls<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.finder
            .links(text)
            .filter(|link| !text[..link.start()].ends_with('@'))
            .map(|link| link.as_str())
            .filter(|url| url.contains("://") || has_public_suffix(url))
            .collect()
    }

    /// Number of URLs in `text`.
    pub fn count_urls(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

impl Default for UrlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for UrlExtractor {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for UrlExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlExtractor").finish_non_exhaustive()
    }
}

/// Scheme-less candidates like `notes.txt` only count when the host ends in
/// a registered suffix.
fn has_public_suffix(url: &str) -> bool {
    let host = url
        .split(['/', '?', '#', ':'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('.')
        .to_lowercase();
    host.contains('.')
        && !host.contains('@')
        && psl::suffix(host.as_bytes()).is_some_and(|s| s.is_known())
}

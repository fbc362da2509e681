//! Word and emoji frequency.
//!
//! Both functions keep the words or emoji exactly as written: no
//! lowercasing, stemming or stop-word removal. Ties are listed in the order
//! they first appear in the chat.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::EmojiScan;
use crate::core::count_descending;
use crate::core::scope::Scope;
use crate::record::RecordTable;

/// One word with its frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
    /// `count` relative to the most frequent word, in `(0, 1]`.
    pub weight: f64,
}

/// Frequency-weighted words for a word cloud, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordCorpus {
    pub words: Vec<WordWeight>,
}

impl WordCorpus {
    /// Returns `true` if no words survived filtering.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of word occurrences.
    pub fn total(&self) -> usize {
        self.words.iter().map(|w| w.count).sum()
    }
}

/// Builds the word cloud corpus for `scope`.
///
/// Media placeholder records are left out. Words are whitespace-separated
/// tokens taken verbatim.
pub fn create_word_frequency_corpus(scope: &Scope, table: &RecordTable) -> WordCorpus {
    let words = table
        .scoped(scope)
        .filter(|r| !r.is_media())
        .flat_map(|r| r.text().split_whitespace());

    let counts = count_descending(words);
    let max = counts.first().map_or(0, |&(_, count)| count);

    WordCorpus {
        words: counts
            .into_iter()
            .map(|(word, count)| WordWeight {
                word: word.to_string(),
                count,
                weight: count as f64 / max as f64,
            })
            .collect(),
    }
}

/// How often one emoji was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Emoji used in `scope`, most frequent first.
///
/// See [`EmojiScan`] for the difference between the two scanning modes.
///
/// # Example
///
/// ```rust
/// use chatstat::config::EmojiScan;
/// use chatstat::core::{Scope, most_common_emoji};
///
/// let table = chatstat::parse("01/01/24, 9:00 am - Ann: 🎉 done 🎉 😀\n")?;
/// let emoji = most_common_emoji(&Scope::Overall, &table, EmojiScan::Grapheme);
///
/// assert_eq!(emoji[0].emoji, "🎉");
/// assert_eq!(emoji[0].count, 2);
/// assert_eq!(emoji[1].emoji, "😀");
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn most_common_emoji(scope: &Scope, table: &RecordTable, scan: EmojiScan) -> Vec<EmojiCount> {
    let mut found: Vec<&str> = Vec::new();
    for record in table.scoped(scope) {
        match scan {
            EmojiScan::Grapheme => found.extend(
                record
                    .text()
                    .graphemes(true)
                    .filter(|g| is_emoji_cluster(g)),
            ),
            EmojiScan::Codepoint => found.extend(
                record
                    .text()
                    .char_indices()
                    .map(|(i, c)| &record.text()[i..i + c.len_utf8()])
                    .filter(|c| emojis::get(c).is_some()),
            ),
        }
    }

    count_descending(found.into_iter())
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect()
}

/// Checks a grapheme cluster against the emoji database.
///
/// Clusters that aren't listed verbatim are retried without presentation
/// selectors and skin tone modifiers, then with a single VS16 appended.
fn is_emoji_cluster(cluster: &str) -> bool {
    const VS16: char = '\u{fe0f}';

    if emojis::get(cluster).is_some() {
        return true;
    }
    if cluster.is_ascii() {
        return false;
    }

    let base: String = cluster
        .chars()
        .filter(|&c| c != VS16 && !is_skin_tone(c))
        .collect();
    !base.is_empty()
        && (emojis::get(&base).is_some() || emojis::get(&format!("{base}{VS16}")).is_some())
}

fn is_skin_tone(c: char) -> bool {
    ('\u{1f3fb}'..='\u{1f3ff}').contains(&c)
}

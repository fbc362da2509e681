//! Headline counts and the busiest-senders leaderboard.

use serde::Serialize;

use crate::config::DEFAULT_BUSY_USERS_LIMIT;
use crate::core::count_descending;
use crate::core::links::UrlExtractor;
use crate::core::scope::Scope;
use crate::record::{MessageRecord, RecordTable};

/// Headline counts for one scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    /// Number of records.
    pub message_count: usize,
    /// Whitespace-separated tokens across all texts.
    pub word_count: usize,
    /// Records whose text is the media placeholder.
    pub media_count: usize,
    /// URLs found across all texts.
    pub link_count: usize,
}

/// Computes message, word, media and link counts for `scope`.
///
/// # Example
///
/// ```rust
/// use chatstat::core::{Scope, UrlExtractor, fetch_stats};
///
/// let table = chatstat::parse(
///     "01/01/24, 9:00 am - Ann: see https://x.co now\n01/01/24, 9:01 am - Ben: <Media omitted>\n",
/// )?;
/// let stats = fetch_stats(&Scope::Overall, &table, &UrlExtractor::new());
///
/// assert_eq!(stats.message_count, 2);
/// assert_eq!(stats.word_count, 5);
/// assert_eq!(stats.media_count, 1);
/// assert_eq!(stats.link_count, 1);
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn fetch_stats(scope: &Scope, table: &RecordTable, urls: &UrlExtractor) -> MessageStats {
    table
        .scoped(scope)
        .fold(MessageStats::default(), |mut stats, record| {
            stats.message_count += 1;
            stats.word_count += record.text().split_whitespace().count();
            if record.is_media() {
                stats.media_count += 1;
            }
            stats.link_count += urls.count_urls(record.text());
            stats
        })
}

/// Messages sent by one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    pub sender: String,
    pub message_count: usize,
}

/// One sender's share of all messages, in percent with 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub name: String,
    pub percent: f64,
}

/// The busiest-senders leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The top senders by message count.
    pub top: Vec<SenderCount>,
    /// Every sender's share, busiest first. Sums to 100.
    pub percentages: Vec<SenderShare>,
}

/// Top 5 senders plus every sender's share of the whole chat.
///
/// Always looks at the full table; there is no scope. The system sentinel is
/// counted like any sender.
pub fn most_busy_users(table: &RecordTable) -> BusyUsers {
    busy_users(table, DEFAULT_BUSY_USERS_LIMIT)
}

/// Like [`most_busy_users`] with a custom leaderboard length.
pub fn busy_users(table: &RecordTable, limit: usize) -> BusyUsers {
    let counts = count_descending(table.iter().map(MessageRecord::sender));
    let total = table.len();

    let top = counts
        .iter()
        .take(limit)
        .map(|&(sender, message_count)| SenderCount {
            sender: sender.to_string(),
            message_count,
        })
        .collect();

    let percentages = counts
        .iter()
        .zip(share_hundredths(&counts, total))
        .map(|(&(sender, _), hundredths)| SenderShare {
            name: sender.to_string(),
            percent: hundredths as f64 / 100.0,
        })
        .collect();

    BusyUsers { top, percentages }
}

/// Whole-chat shares in hundredths of a percent, summing to exactly 10000.
///
/// Largest-remainder apportionment: every share is floored, then the leftover
/// hundredths go to the largest remainders. Equal remainders favour the
/// earlier entry in `counts`.
fn share_hundredths(counts: &[(&str, usize)], total: usize) -> Vec<usize> {
    const WHOLE: usize = 10_000;

    if total == 0 {
        return vec![0; counts.len()];
    }

    let mut shares: Vec<usize> = counts.iter().map(|&(_, c)| c * WHOLE / total).collect();
    let leftover = WHOLE - shares.iter().sum::<usize>();

    let mut by_remainder: Vec<usize> = (0..counts.len()).collect();
    by_remainder.sort_by_key(|&i| std::cmp::Reverse(counts[i].1 * WHOLE % total));
    for &i in by_remainder.iter().take(leftover) {
        shares[i] += 1;
    }
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const EXPORT: &str = "\
01/01/24, 9:00 am - Alice: hello there
01/01/24, 9:01 am - Bob: <Media omitted>
01/01/24, 9:02 am - Alice: check http://example.com and https://x.co
01/01/24, 9:03 am - Carol: ok
01/01/24, 9:04 am - Alice added Dave
01/01/24, 9:05 am - Bob: multi
line message
";

    #[test]
    fn test_fetch_stats_overall() {
        let table = parse(EXPORT).unwrap();
        let stats = fetch_stats(&Scope::Overall, &table, &UrlExtractor::new());
        assert_eq!(stats.message_count, 6);
        // 2 + 2 + 4 + 1 + 3 + 3
        assert_eq!(stats.word_count, 15);
        assert_eq!(stats.media_count, 1);
        assert_eq!(stats.link_count, 2);
    }

    #[test]
    fn test_fetch_stats_scoped() {
        let table = parse(EXPORT).unwrap();
        let urls = UrlExtractor::new();

        let alice = fetch_stats(&Scope::sender("Alice"), &table, &urls);
        assert_eq!(alice.message_count, 2);
        assert_eq!(alice.word_count, 6);
        assert_eq!(alice.media_count, 0);
        assert_eq!(alice.link_count, 2);

        let bob = fetch_stats(&Scope::sender("Bob"), &table, &urls);
        assert_eq!(bob.message_count, 2);
        assert_eq!(bob.media_count, 1);
        assert_eq!(bob.link_count, 0);
    }

    #[test]
    fn test_fetch_stats_unknown_sender_is_zero() {
        let table = parse(EXPORT).unwrap();
        let stats = fetch_stats(&Scope::sender("Mallory"), &table, &UrlExtractor::new());
        assert_eq!(stats, MessageStats::default());
    }

    #[test]
    fn test_fetch_stats_empty_table() {
        let stats = fetch_stats(&Scope::Overall, &RecordTable::default(), &UrlExtractor::new());
        assert_eq!(stats, MessageStats::default());
    }

    #[test]
    fn test_most_busy_users() {
        let table = parse(EXPORT).unwrap();
        let busy = most_busy_users(&table);

        let top: Vec<(&str, usize)> = busy
            .top
            .iter()
            .map(|s| (s.sender.as_str(), s.message_count))
            .collect();
        assert_eq!(
            top,
            vec![
                ("Alice", 2),
                ("Bob", 2),
                ("Carol", 1),
                (crate::record::SYSTEM_SENDER, 1)
            ]
        );

        assert_eq!(busy.percentages[0].name, "Alice");
        assert!((busy.percentages[0].percent - 33.33).abs() < f64::EPSILON);
        assert!((busy.percentages[2].percent - 16.67).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let table = parse(EXPORT).unwrap();
        let sum: f64 = most_busy_users(&table).percentages.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() <= 0.1, "sum was {sum}");
    }

    #[test]
    fn test_top_is_limited_but_percentages_are_not() {
        let export: String = (0..7)
            .map(|i| format!("01/01/24, 9:0{i} am - User{i}: hi\n"))
            .collect();
        let table = parse(&export).unwrap();

        let busy = most_busy_users(&table);
        assert_eq!(busy.top.len(), 5);
        assert_eq!(busy.percentages.len(), 7);

        let busy = busy_users(&table, 2);
        assert_eq!(busy.top.len(), 2);
        assert_eq!(busy.top[0].sender, "User0");
    }

    #[test]
    fn test_percentages_stay_exact_with_many_senders() {
        let export: String = (0..31)
            .map(|i| format!("01/01/24, 9:{i:02} am - User{i}: hi\n"))
            .collect();
        let table = parse(&export).unwrap();

        let busy = most_busy_users(&table);
        assert_eq!(busy.percentages.len(), 31);

        let hundredths: usize = busy
            .percentages
            .iter()
            .map(|s| (s.percent * 100.0).round() as usize)
            .sum();
        assert_eq!(hundredths, 10_000);

        let sum: f64 = busy.percentages.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() <= 0.1, "sum was {sum}");

        // 10000 / 31 = 322 rem 18: the first 18 senders get the extra hundredth
        assert!((busy.percentages[0].percent - 3.23).abs() < 1e-9);
        assert!((busy.percentages[17].percent - 3.23).abs() < 1e-9);
        assert!((busy.percentages[18].percent - 3.22).abs() < 1e-9);
        assert_eq!(busy.percentages[18].name, "User18");
    }

    #[test]
    fn test_share_hundredths_largest_remainder() {
        // 2/6 -> 3333 r2, 1/6 -> 1666 r4: the two leftovers go to the 1/6 shares
        let counts = [("a", 2), ("b", 2), ("c", 1), ("d", 1)];
        assert_eq!(share_hundredths(&counts, 6), vec![3333, 3333, 1667, 1667]);

        let thirds = [("a", 1), ("b", 1), ("c", 1)];
        assert_eq!(share_hundredths(&thirds, 3), vec![3334, 3333, 3333]);

        assert_eq!(share_hundredths(&[], 0), Vec::<usize>::new());
    }

    #[test]
    fn test_most_busy_users_empty() {
        let busy = most_busy_users(&RecordTable::default());
        assert!(busy.top.is_empty());
        assert!(busy.percentages.is_empty());
    }
}

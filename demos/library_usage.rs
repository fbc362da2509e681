//! Example: Using chatstat as a library
//!
//! This example walks through the aggregations on a small inline export.
//!
//! Run with: cargo run --example library_usage

use chatstat::prelude::*;

const EXPORT: &str = "\
Messages and calls are end-to-end encrypted.
05/03/24, 9:15 pm - Alice created group \"Weekend\"
05/03/24, 9:16 pm - Alice: Anyone free on Saturday? 🎉
05/03/24, 9:20 pm - Bob: yes! plan is at https://example.com/plan
05/03/24, 9:21 pm - Carol: <Media omitted>
06/03/24, 8:02 am - Alice: great 🎉🎉
07/04/24, 10:30 am - Bob: photos coming
later tonight 👍🏽
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatstat Library Usage Examples ===\n");

    // Example 1: Parse an export
    println!("1. Parsing an export:");
    let table = parse(EXPORT)?;
    for record in &table {
        println!(
            "   [{}] {}: {}",
            record.timestamp(),
            record.sender(),
            record.text().trim_end().replace('\n', " | ")
        );
    }

    // Example 2: Choosing a scope
    println!("\n2. Scopes available in this chat:");
    for choice in Scope::choices(&table) {
        println!("   {choice}");
    }

    // Example 3: Headline counts
    println!("\n3. Headline counts:");
    let urls = UrlExtractor::new();
    for scope in [Scope::Overall, Scope::sender("Bob")] {
        let stats = fetch_stats(&scope, &table, &urls);
        println!(
            "   {scope}: {} messages, {} words, {} media, {} links",
            stats.message_count, stats.word_count, stats.media_count, stats.link_count
        );
    }

    // Example 4: Leaderboard
    println!("\n4. Busiest senders:");
    let busy = most_busy_users(&table);
    for share in &busy.percentages {
        println!("   {:<20} {:.2}%", share.name, share.percent);
    }

    // Example 5: Emoji, both scan modes
    println!("\n5. Emoji by scan mode:");
    for scan in [EmojiScan::Grapheme, EmojiScan::Codepoint] {
        let emoji = most_common_emoji(&Scope::Overall, &table, scan);
        let listed: Vec<String> = emoji.iter().map(|e| format!("{}×{}", e.emoji, e.count)).collect();
        println!("   {scan}: {}", listed.join(" "));
    }

    // Example 6: Timelines
    println!("\n6. Monthly timeline:");
    for point in monthly_timeline(&Scope::Overall, &table) {
        println!("   {:<16} {}", point.composite_label, point.message_count);
    }

    // Example 7: Everything at once, as JSON
    println!("\n7. Full report for Alice:");
    let analyzer = Analyzer::with_config(AnalysisConfig::new().with_busy_users_limit(3));
    let report = analyzer.report(&Scope::sender("Alice"), &table);
    println!("{}", serde_json::to_string_pretty(&report)?);

    // Example 8: Records as JSONL
    println!("\n8. Records as JSONL:");
    print!("{}", to_format_string(&table, OutputFormat::Jsonl)?);

    println!("\n=== Examples complete! ===");
    Ok(())
}

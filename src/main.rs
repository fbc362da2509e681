//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatstat::ChatstatError;
use chatstat::cli::{Args, ReportFormat};
use chatstat::core::Scope;
use chatstat::format::{OutputFormat, write_to_format};
use chatstat::parser::ExportParser;
use chatstat::report::{Analyzer, Report};

/// Rows shown per ranked list in the text report.
const LIST_LIMIT: usize = 10;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    setup_logging(args.log_directive());

    let scope = args.scope()?;
    let config = args.analysis_config()?;
    let export_format = args
        .export
        .as_deref()
        .map(OutputFormat::from_path)
        .transpose()?;

    let parser = ExportParser::with_config(args.parser_config());
    let parse_start = Instant::now();
    let table = parser.parse_file(Path::new(&args.input))?;
    let parse_time = parse_start.elapsed();
    tracing::info!(
        records = table.len(),
        elapsed_ms = parse_time.as_millis() as u64,
        "parsed {}",
        args.input
    );

    if args.users {
        for choice in Scope::choices(&table) {
            println!("{choice}");
        }
        return Ok(());
    }

    if let (Some(path), Some(format)) = (args.export.as_deref(), export_format) {
        print_header(&args, &scope);
        println!("   Found {} messages ({:.2}s)", table.len(), parse_time.as_secs_f64());
        println!("💾 Writing {}...", format);
        let write_start = Instant::now();
        write_to_format(&table, path, format)?;
        println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());
        println!();
        println!("✅ Done! Records saved to {}", path);
        return Ok(());
    }

    let report = Analyzer::with_config(config).report(&scope, &table);

    match args.format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Text => {
            print_header(&args, &scope);
            println!(
                "   Found {} messages ({:.2}s)",
                table.len(),
                parse_time.as_secs_f64()
            );
            print_report(&report);
            println!();
            println!("⚡ Done in {:.2}s", total_start.elapsed().as_secs_f64());
        }
    }

    Ok(())
}

/// Installs a stderr `fmt` subscriber. `RUST_LOG` wins over `-v`.
fn setup_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();
}

fn print_header(args: &Args, scope: &Scope) {
    println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("👤 Scope:   {}", scope);
    println!();
}

fn print_report(report: &Report) {
    let stats = &report.stats;
    println!();
    println!("📈 Top statistics:");
    println!("   Messages:  {}", stats.message_count);
    println!("   Words:     {}", stats.word_count);
    println!("   Media:     {}", stats.media_count);
    println!("   Links:     {}", stats.link_count);

    if let Some(busy) = &report.busy_users {
        println!();
        println!("🏆 Most busy users:");
        for sender in &busy.top {
            println!("   {:<24} {}", sender.sender, sender.message_count);
        }
        println!("   Share of messages:");
        for share in &busy.percentages {
            println!("   {:<24} {:.2}%", share.name, share.percent);
        }
    }

    println!();
    println!("💬 Most common words:");
    if report.words.is_empty() {
        println!("   (none)");
    }
    for word in report.words.words.iter().take(LIST_LIMIT) {
        println!("   {:<24} {}", word.word, word.count);
    }

    println!();
    println!("😀 Most common emoji:");
    if report.emoji.is_empty() {
        println!("   (none)");
    }
    for emoji in report.emoji.iter().take(LIST_LIMIT) {
        println!("   {}  {}", emoji.emoji, emoji.count);
    }

    println!();
    println!("🗓️  Monthly timeline:");
    for point in &report.monthly_timeline {
        println!("   {:<24} {}", point.composite_label, point.message_count);
    }

    println!();
    println!("📅 Daily timeline:");
    println!("   Active days: {}", report.daily_timeline.len());
    if let Some(busiest) = report
        .daily_timeline
        .iter()
        .max_by_key(|p| (p.message_count, std::cmp::Reverse(p.calendar_date)))
    {
        println!(
            "   Busiest day: {} ({} messages)",
            busiest.calendar_date, busiest.message_count
        );
    }

    println!();
    println!("📆 Busiest days of the week:");
    for day in &report.week_activity {
        println!("   {:<24} {}", day.weekday_name, day.message_count);
    }

    println!();
    println!("🌙 Busiest months:");
    for month in &report.month_activity {
        println!("   {:<24} {}", month.month_name, month.message_count);
    }
}

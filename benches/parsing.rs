//! Benchmarks for chatstat parsing and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- emoji`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstat::RecordTable;
use chatstat::config::EmojiScan;
use chatstat::core::output::{to_csv, to_jsonl};
use chatstat::core::{
    Scope, UrlExtractor, create_word_frequency_corpus, daily_timeline, fetch_stats,
    most_busy_users, most_common_emoji, monthly_timeline, week_activity_map,
};
use chatstat::parser::ExportParser;
use chatstat::report::Analyzer;

use chrono::{Duration, NaiveDate};

// =============================================================================
// Test Data Generators
// =============================================================================

const SENDERS: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

fn generate_export(count: usize) -> String {
    let base_time = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap();

    let mut out = String::with_capacity(count * 64);
    for i in 0..count {
        let ts = base_time + Duration::minutes(i as i64 * 37);
        out.push_str(&ts.format("%d/%m/%y, %-I:%M %P - ").to_string());
        match i % 10 {
            0 => out.push_str("Alice added Bob\n"),
            1 => {
                out.push_str(SENDERS[i % 4]);
                out.push_str(": <Media omitted>\n");
            }
            2 => {
                out.push_str(SENDERS[i % 4]);
                out.push_str(&format!(": see https://example.com/{i} 🎉👍🏽\n"));
            }
            3 => {
                out.push_str(SENDERS[i % 4]);
                out.push_str(&format!(": line one {i}\nline two\nline three\n"));
            }
            _ => {
                out.push_str(SENDERS[i % 4]);
                out.push_str(&format!(": message number {i} 😀\n"));
            }
        }
    }
    out
}

fn generate_table(count: usize) -> RecordTable {
    ExportParser::new().parse_str(&generate_export(count)).unwrap()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let parser = ExportParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let export = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &export, |b, export| {
            b.iter(|| {
                let table = parser.parse_str(black_box(export)).unwrap();
                black_box(table)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_fetch_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch_stats");
    let urls = UrlExtractor::new();

    for size in [1_000_usize, 10_000, 50_000] {
        let table = generate_table(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("overall", size), &table, |b, table| {
            b.iter(|| black_box(fetch_stats(&Scope::Overall, black_box(table), &urls)));
        });
        group.bench_with_input(BenchmarkId::new("sender", size), &table, |b, table| {
            let scope = Scope::sender("Alice");
            b.iter(|| black_box(fetch_stats(&scope, black_box(table), &urls)));
        });
    }
    group.finish();
}

fn bench_busy_users(c: &mut Criterion) {
    let mut group = c.benchmark_group("most_busy_users");

    for size in [1_000_usize, 10_000, 50_000] {
        let table = generate_table(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| black_box(most_busy_users(black_box(table))));
        });
    }
    group.finish();
}

fn bench_word_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_corpus");

    for size in [1_000_usize, 10_000, 50_000] {
        let table = generate_table(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| black_box(create_word_frequency_corpus(&Scope::Overall, black_box(table))));
        });
    }
    group.finish();
}

fn bench_emoji(c: &mut Criterion) {
    let mut group = c.benchmark_group("emoji");

    for size in [1_000_usize, 10_000] {
        let table = generate_table(size);
        group.throughput(Throughput::Elements(size as u64));
        for scan in [EmojiScan::Grapheme, EmojiScan::Codepoint] {
            group.bench_with_input(BenchmarkId::new(scan.to_string(), size), &table, |b, table| {
                b.iter(|| black_box(most_common_emoji(&Scope::Overall, black_box(table), scan)));
            });
        }
    }
    group.finish();
}

fn bench_timelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("timelines");

    for size in [1_000_usize, 10_000, 50_000] {
        let table = generate_table(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("monthly", size), &table, |b, table| {
            b.iter(|| black_box(monthly_timeline(&Scope::Overall, black_box(table))));
        });
        group.bench_with_input(BenchmarkId::new("daily", size), &table, |b, table| {
            b.iter(|| black_box(daily_timeline(&Scope::Overall, black_box(table))));
        });
        group.bench_with_input(BenchmarkId::new("weekday", size), &table, |b, table| {
            b.iter(|| black_box(week_activity_map(&Scope::Overall, black_box(table))));
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    for size in [100_usize, 1_000, 10_000] {
        let table = generate_table(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("csv", size), &table, |b, table| {
            b.iter(|| black_box(to_csv(black_box(table)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("jsonl", size), &table, |b, table| {
            b.iter(|| black_box(to_jsonl(black_box(table)).unwrap()));
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    let parser = ExportParser::new();
    let analyzer = Analyzer::new();

    for size in [1_000_usize, 10_000] {
        let export = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &export, |b, export| {
            b.iter(|| {
                // Full pipeline: parse -> every aggregation
                let table = parser.parse_str(black_box(export)).unwrap();
                black_box(analyzer.report(&Scope::Overall, &table))
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_parsing,
    bench_fetch_stats,
    bench_busy_users,
    bench_word_corpus,
    bench_emoji,
    bench_timelines,
    bench_output,
    bench_full_report,
);

criterion_main!(benches);

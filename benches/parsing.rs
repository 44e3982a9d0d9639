//! Benchmarks for chatlens parsing and analysis.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- analyze`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::analysis::analyze;
use chatlens::parsing::{TranscriptParser, parse_transcript};

// =============================================================================
// Test Data Generators
// =============================================================================

const CONTENTS: [&str; 6] = [
    "Hello there, how are you doing today?",
    "coffee sounds great, see you at the usual place",
    "I love this so much ❤️",
    "image omitted",
    "check https://example.com for the details",
    "soooo goooood, can't wait!!!",
];

fn generate_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let hour = i % 24;
        let minute = i % 60;
        lines.push(format!(
            "[15/01/24, {:02}:{:02}:00] {}: {}",
            hour,
            minute,
            sender,
            CONTENTS[i % CONTENTS.len()]
        ));
    }
    lines.join("\n")
}

/// A transcript where every third line is a continuation of the previous
/// message, exercising the open-message merge path.
fn generate_multiline_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        if i % 3 == 2 {
            lines.push(format!("continuation of the previous message {i}"));
        } else {
            let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
            lines.push(format!(
                "[15/01/24, {:02}:{:02}:00] {}: {}",
                i % 24,
                i % 60,
                sender,
                CONTENTS[i % CONTENTS.len()]
            ));
        }
    }
    lines.join("\n")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let records = parse_transcript(black_box(txt));
                black_box(records)
            });
        });
    }
    group.finish();
}

fn bench_parse_multiline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_multiline");

    for size in [100_usize, 1_000, 10_000] {
        let txt = generate_multiline_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let records = parse_transcript(black_box(txt));
                black_box(records)
            });
        });
    }
    group.finish();
}

/// Measures the reusable-parser path separately from cascade compilation.
fn bench_parser_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_reuse");
    let parser = TranscriptParser::new();
    let txt = generate_transcript(10_000);

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("10000", |b| {
        b.iter(|| {
            let records = parser.parse(black_box(&txt));
            black_box(records)
        });
    });
    group.finish();
}

// =============================================================================
// Analysis Benchmarks
// =============================================================================

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let records = parse_transcript(&generate_transcript(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| {
                b.iter(|| {
                    let report = analyze(black_box(records)).unwrap();
                    black_box(report)
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let report = chatlens::analyze_transcript(black_box(txt)).unwrap();
                black_box(report)
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
    bench_parse,
    bench_parse_multiline,
    bench_parser_reuse,
    bench_analyze,
    bench_full_pipeline,
);

criterion_main!(benches);

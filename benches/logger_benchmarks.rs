//! Criterion benchmarks for log_pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use log_pipeline::prelude::*;
use std::sync::Arc;

/// Output that discards everything, so only pipeline overhead is measured
struct NullOutput;

impl LogOutput for NullOutput {
    fn write(&self, message: &str, _level: LogLevel) -> Result<()> {
        black_box(message);
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn null_logger(levels: &[LogLevel]) -> Logger {
    let pipeline = Pipeline::builder()
        .config(LoggerConfig {
            levels: levels.to_vec(),
            ..LoggerConfig::default()
        })
        .output(NullOutput)
        .build();
    Logger::with_pipeline("Bench", Arc::new(pipeline))
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(&LogLevel::ALL);

    group.bench_function("info_text", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"), []);
        });
    });

    group.bench_function("info_with_params", |b| {
        b.iter(|| {
            logger.info(
                black_box("Info message"),
                [LogValue::from(42), LogValue::from("extra")],
            );
        });
    });

    group.bench_function("error_with_trace", |b| {
        b.iter(|| {
            logger.error(black_box("Error message"), Some(LogValue::from("at main")));
        });
    });

    logger.pipeline().set_formatter(Arc::new(JsonFormatter::new()));
    group.bench_function("info_json", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"), []);
        });
    });

    group.finish();
}

// ============================================================================
// Level Gating Benchmarks
// ============================================================================

fn bench_level_gating(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_gating");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(&[LogLevel::Error]);

    group.bench_function("muted_debug", |b| {
        b.iter(|| {
            logger.debug(black_box("Debug message"), [LogValue::from(1)]);
        });
    });

    group.bench_function("is_level_enabled", |b| {
        b.iter(|| black_box(logger.is_level_enabled(black_box(LogLevel::Verbose))));
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(LogLevel::Info, "Test message")
        .with_context(Some("BenchContext"))
        .with_params(vec![LogValue::from(7)]);
    let plain = LoggerConfig::default();
    let colored = LoggerConfig {
        use_colors: true,
        ..LoggerConfig::default()
    };

    group.bench_function("text_plain", |b| {
        b.iter(|| black_box(TextFormatter::new().format_message(&entry, &plain)));
    });

    group.bench_function("text_colored", |b| {
        b.iter(|| black_box(TextFormatter::new().format_message(&entry, &colored)));
    });

    group.bench_function("json", |b| {
        b.iter(|| black_box(JsonFormatter::new().format_message(&entry, &plain)));
    });

    group.finish();
}

criterion_group!(benches, bench_emission, bench_level_gating, bench_formatters);
criterion_main!(benches);

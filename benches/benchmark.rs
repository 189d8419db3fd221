//! Benchmarks for format_mask performance testing.
//!
//! Run with: cargo bench

use format_mask::{
    apply_pattern,
    batch::{apply_pattern_all, mask_all},
    mask, mask_segmented, Bounds, FormatOptions, Formatter, Mode, SecretSpan, SegmentSpan,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const CPF: &str = "12345678909";
const CPF_FORMATTED: &str = "123.456.789-09";
const CARD: &str = "1234567812345678";
const EMAIL: &str = "example@example.com";
const AMOUNT: &str = "123456789";

/// Benchmark template substitution
fn bench_apply_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_pattern");
    let digits = FormatOptions::new().only_numbers();

    group.bench_function("cpf_raw", |b| {
        b.iter(|| apply_pattern(black_box(CPF), "###.###.###-##", &digits, Mode::Plain))
    });

    group.bench_function("cpf_formatted", |b| {
        b.iter(|| apply_pattern(black_box(CPF_FORMATTED), "###.###.###-##", &digits, Mode::Plain))
    });

    group.bench_function("card_unfiltered", |b| {
        b.iter(|| {
            apply_pattern(
                black_box(CARD),
                "#### #### #### ####",
                &FormatOptions::new(),
                Mode::Plain,
            )
        })
    });

    group.finish();
}

/// Benchmark both masking modes
fn bench_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask");

    let middle = SecretSpan::new(0, 4);
    let edges = SecretSpan::new(3, 2).hide_edges();
    let specials = SecretSpan::new(2, 0).escape_end(3).special(['-', '.']);

    group.bench_function("hidden_middle", |b| b.iter(|| mask(black_box(CARD), &middle)));
    group.bench_function("hidden_edges", |b| b.iter(|| mask(black_box(CPF), &edges)));
    group.bench_function("special_characters", |b| {
        b.iter(|| mask(black_box("example-example.com"), &specials))
    });

    group.finish();
}

/// Benchmark segment-wise masking
fn bench_segmented(c: &mut Criterion) {
    let span = SegmentSpan::new(Bounds::Each(vec![2, 1]), Bounds::One(0), ['@', '.']);

    c.bench_function("mask_segmented_email", |b| {
        b.iter(|| mask_segmented(black_box(EMAIL), &span))
    });
}

/// Benchmark registry dispatch through the formatter
fn bench_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("fields");
    let mut formatter = Formatter::new();

    group.bench_function("cpf", |b| b.iter(|| formatter.cpf(black_box(CPF))));
    group.bench_function("secret_cpf", |b| b.iter(|| formatter.secret_cpf(black_box(CPF))));
    group.bench_function("real_currency", |b| {
        b.iter(|| formatter.real_currency(black_box(AMOUNT)))
    });
    group.bench_function("secret_real_currency", |b| {
        b.iter(|| formatter.secret_real_currency(black_box(AMOUNT)))
    });
    group.bench_function("secret_email", |b| {
        b.iter(|| formatter.secret_email(black_box(EMAIL)))
    });

    group.finish();
}

/// Benchmark batch helpers at several sizes
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let digits = FormatOptions::new().only_numbers();
    let span = SecretSpan::new(0, 4);

    for size in [100, 1_000, 10_000] {
        let cards: Vec<String> = (0..size).map(|i| format!("{:016}", i)).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("apply_pattern_all", size), &cards, |b, cards| {
            b.iter(|| apply_pattern_all(black_box(cards), "#### #### #### ####", &digits))
        });

        group.bench_with_input(BenchmarkId::new("mask_all", size), &cards, |b, cards| {
            b.iter(|| mask_all(black_box(cards), &span))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apply_pattern,
    bench_mask,
    bench_segmented,
    bench_fields,
    bench_batch,
);
criterion_main!(benches);

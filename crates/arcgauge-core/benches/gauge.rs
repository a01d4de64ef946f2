//! Benchmark tests for gauge computation.

use arcgauge_core::{compute_gauge, format_number, gauge_fraction, GaugeInput, NumberLocale};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_gauge_fraction(c: &mut Criterion) {
    c.bench_function("gauge_fraction", |b| {
        b.iter(|| gauge_fraction(black_box(42.0), black_box(100.0)))
    });
}

fn bench_compute_gauge(c: &mut Criterion) {
    let input = GaugeInput::new(50.0, 100.0).label("VIP");

    c.bench_function("compute_gauge", |b| {
        b.iter(|| compute_gauge(black_box(&input)))
    });
}

fn bench_compute_gauge_custom_formatter(c: &mut Criterion) {
    let input = GaugeInput::new(1_234.5, 2_000.0).formatter(|v: f64| format!("{v:.1} kg"));

    c.bench_function("compute_gauge_custom_formatter", |b| {
        b.iter(|| compute_gauge(black_box(&input)))
    });
}

fn bench_format_number(c: &mut Criterion) {
    c.bench_function("format_number_ru", |b| {
        b.iter(|| format_number(black_box(3_450_000.125), NumberLocale::RuRu))
    });
}

criterion_group!(
    benches,
    bench_gauge_fraction,
    bench_compute_gauge,
    bench_compute_gauge_custom_formatter,
    bench_format_number,
);
criterion_main!(benches);

//! Benchmarks for value-date resolution and batch processing.
//!
//! Run with: cargo bench -p cipfx-engine --features parallel

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cipfx_core::calendars::JointCalendar;
use cipfx_core::Date;
use cipfx_engine::batch::{run_batch, run_batch_parallel};
use cipfx_engine::presets::usd_sgd_calendar;
use cipfx_engine::{BatchPolicy, RateEngine, SwapObservation, Tenor};

fn calendar() -> JointCalendar {
    usd_sgd_calendar([2026]).unwrap()
}

/// One quote per calendar day from 1 Jan 2026, cycling through trade dates
/// whose 6M forward stays inside 2026.
fn observations(count: usize) -> Vec<SwapObservation> {
    let start = Date::from_ymd(2026, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let trade = start.add_days((i % 160) as i64);
            let jitter = (i % 7) as f64 * 0.001;
            SwapObservation::new(trade, 3.65 + jitter, 1.34 + jitter, -80.0 + jitter * 100.0)
        })
        .collect()
}

fn bench_value_dates(c: &mut Criterion) {
    let calendar = calendar();
    let trade = Date::from_ymd(2026, 2, 13).unwrap();

    let mut group = c.benchmark_group("value_dates");
    for tenor in Tenor::ALL {
        let engine = RateEngine::new(&calendar, tenor);
        group.bench_function(tenor.code(), |b| {
            b.iter(|| engine.value_dates(black_box(trade)))
        });
    }
    group.finish();
}

fn bench_batch_sequential(c: &mut Criterion) {
    let calendar = calendar();
    let engine = RateEngine::new(&calendar, Tenor::SixMonths);

    let mut group = c.benchmark_group("batch_sequential");
    group.sample_size(50);

    for size in [10, 100, 1000].iter() {
        let inputs = observations(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inputs, |b, inputs| {
            b.iter(|| run_batch(&engine, black_box(inputs), BatchPolicy::SkipAndContinue))
        });
    }
    group.finish();
}

fn bench_batch_parallel(c: &mut Criterion) {
    let calendar = calendar();
    let engine = RateEngine::new(&calendar, Tenor::SixMonths);

    let mut group = c.benchmark_group("batch_parallel");
    group.sample_size(50);

    for size in [100, 1000, 10_000].iter() {
        let inputs = observations(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inputs, |b, inputs| {
            b.iter(|| run_batch_parallel(&engine, black_box(inputs), BatchPolicy::SkipAndContinue))
        });
    }
    group.finish();
}

criterion_group!(dates, bench_value_dates);
criterion_group!(batch, bench_batch_sequential, bench_batch_parallel);
criterion_main!(dates, batch);

//! Aggregation throughput over synthetic tick buffers.
//!
//! Run with: `cargo bench --package tickbar-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tickbar_bench::{BenchmarkConfig, TICK_COUNTS, bench_bar};
use tickbar_lib::{Aggregator, AggregatorConfig, CandleAggregator, parse_ticks};

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let aggregator = Aggregator::new(AggregatorConfig::new(bench_bar()));

    for ticks in TICK_COUNTS {
        let config = BenchmarkConfig {
            ticks,
            ..Default::default()
        };
        let input = config.input();
        if ticks >= 1_000_000 {
            group.sample_size(10);
        }
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("buffer", ticks), &input, |b, input| {
            b.iter(|| aggregator.aggregate(black_box(input.as_bytes())));
        });
    }

    group.finish();
}

fn streaming_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let config = BenchmarkConfig::default();
    let ticks: Vec<_> = parse_ticks(config.input().as_bytes())
        .filter_map(Result::ok)
        .map(|(_, tick)| tick)
        .collect();

    group.throughput(Throughput::Elements(ticks.len() as u64));
    group.bench_function("push", |b| {
        b.iter(|| {
            let mut aggregator = CandleAggregator::new(AggregatorConfig::new(bench_bar()));
            let mut completed = 0usize;
            for tick in &ticks {
                if let Ok(Some(_)) = aggregator.push(black_box(*tick)) {
                    completed += 1;
                }
            }
            (completed, aggregator.finish())
        });
    });

    group.finish();
}

criterion_group!(benches, aggregate_benchmark, streaming_benchmark);
criterion_main!(benches);

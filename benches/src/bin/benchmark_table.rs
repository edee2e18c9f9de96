//! Benchmark runner that outputs a markdown table for the README.
//!
//! Run with: `cargo run --package tickbar-bench --bin benchmark_table --release`

use std::io::Write;
use tickbar_bench::{
    BENCH_BAR_SECS, BenchmarkConfig, BenchmarkResult, TICK_COUNTS, average_results,
    format_bytes, format_duration, run_aggregate,
};

/// Number of iterations per benchmark for statistical significance.
const ITERATIONS: usize = 5;

fn main() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();

    println!("tickbar Aggregation Benchmark");
    println!("=============================\n");
    println!(
        "Running benchmarks ({ITERATIONS} iterations each, {BENCH_BAR_SECS}s bars)...\n"
    );

    let mut results: Vec<BenchmarkResult> = Vec::new();

    for ticks in TICK_COUNTS {
        let config = BenchmarkConfig {
            ticks,
            ..Default::default()
        };
        let input = config.input();

        print!("Benchmarking {ticks} ticks ({})... ", format_bytes(input.len() as u64));
        stdout.flush()?;

        // Warm-up pass, not recorded
        let _ = run_aggregate(&config, input.as_bytes());

        let runs: Vec<_> = (0..ITERATIONS)
            .map(|_| run_aggregate(&config, input.as_bytes()))
            .collect();

        if let Some(avg) = average_results(&runs) {
            results.push(avg);
        }
        println!("done");
    }

    println!("\n## Results\n");
    println!("| Ticks | Input | Candles | Time | Throughput | Ticks/s |");
    println!("|-------|-------|---------|------|------------|---------|");

    for result in &results {
        if let Some(error) = &result.error {
            println!("| {} | FAILED - {error} | | | | |", result.ticks);
            continue;
        }
        println!(
            "| {} | {} | {} | {} | {:.1} MB/s | {:.2}M |",
            result.ticks,
            format_bytes(result.input_size),
            result.candles,
            format_duration(result.duration),
            result.throughput_mbps(),
            result.ticks_per_sec() / 1_000_000.0
        );
    }

    // Print environment info
    println!("\n### Environment\n");
    println!("- OS: {}", std::env::consts::OS);
    println!("- Arch: {}", std::env::consts::ARCH);
    println!("- tickbar version: {}", env!("CARGO_PKG_VERSION"));

    Ok(())
}

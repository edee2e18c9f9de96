//! Benchmark utilities for tickbar.

use std::time::{Duration, Instant};
use tickbar_lib::{Aggregator, AggregatorConfig, BarDuration, TickGenerator};

/// Bar width, in seconds, used by the throughput benchmarks.
pub const BENCH_BAR_SECS: u64 = 13;

/// Bar width used by the throughput benchmarks.
pub fn bench_bar() -> BarDuration {
    BarDuration::from_secs(BENCH_BAR_SECS).unwrap_or(BarDuration::ONE_SECOND)
}

/// Input sizes, in ticks, covered by the benchmarks.
pub const TICK_COUNTS: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

/// Result of a single aggregation run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Number of ticks in the input.
    pub ticks: usize,
    /// Size of the input buffer in bytes.
    pub input_size: u64,
    /// Number of candles produced.
    pub candles: usize,
    /// Wall time of the aggregation pass.
    pub duration: Duration,
    /// Error message if the pass failed.
    pub error: Option<String>,
}

impl BenchmarkResult {
    /// Whether the pass completed.
    pub const fn success(&self) -> bool {
        self.error.is_none()
    }

    /// Calculate throughput in MB/s.
    pub fn throughput_mbps(&self) -> f64 {
        let bytes = self.input_size as f64;
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (bytes / 1_000_000.0) / secs
        } else {
            0.0
        }
    }

    /// Calculate ticks per second.
    pub fn ticks_per_sec(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 { self.ticks as f64 / secs } else { 0.0 }
    }
}

/// Configuration for a benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of synthetic ticks.
    pub ticks: usize,
    /// Candle width.
    pub bar_duration: BarDuration,
    /// Generator seed.
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            ticks: 100_000,
            bar_duration: bench_bar(),
            seed: TickGenerator::DEFAULT_SEED,
        }
    }
}

impl BenchmarkConfig {
    /// Builds the synthetic input buffer for this configuration.
    pub fn input(&self) -> String {
        TickGenerator::new()
            .with_seed(self.seed)
            .generate(self.ticks)
    }
}

/// Time one aggregation pass over `input`.
pub fn run_aggregate(config: &BenchmarkConfig, input: &[u8]) -> BenchmarkResult {
    let aggregator = Aggregator::new(AggregatorConfig::new(config.bar_duration));

    let start = Instant::now();
    let result = aggregator.aggregate(input);
    let duration = start.elapsed();

    let (candles, error) = match result {
        Ok(candles) => (candles.len(), None),
        Err(e) => (e.partial().len(), Some(e.to_string())),
    };

    BenchmarkResult {
        ticks: config.ticks,
        input_size: input.len() as u64,
        candles,
        duration,
        error,
    }
}

/// Average the successful runs, or return the first failure.
pub fn average_results(results: &[BenchmarkResult]) -> Option<BenchmarkResult> {
    let successful: Vec<_> = results.iter().filter(|r| r.success()).collect();

    if successful.is_empty() {
        return results.first().cloned();
    }

    let avg_duration = Duration::from_secs_f64(
        successful
            .iter()
            .map(|r| r.duration.as_secs_f64())
            .sum::<f64>()
            / successful.len() as f64,
    );

    successful.first().map(|first| BenchmarkResult {
        duration: avg_duration,
        ..(*first).clone()
    })
}

/// Format duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.0}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.2}s")
    }
}

/// Format bytes for display.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_aggregate() {
        let config = BenchmarkConfig {
            ticks: 2_000,
            ..Default::default()
        };
        let input = config.input();
        let result = run_aggregate(&config, input.as_bytes());

        assert!(result.success());
        assert!(result.candles > 0);
        assert_eq!(result.input_size, input.len() as u64);
    }

    #[test]
    fn test_run_aggregate_failure() {
        let config = BenchmarkConfig::default();
        let result = run_aggregate(&config, b"5,1.0,1\nbad\n");
        assert!(!result.success());
        assert_eq!(result.candles, 0);
    }

    #[test]
    fn test_average_results() {
        let run = |ms| BenchmarkResult {
            ticks: 10,
            input_size: 100,
            candles: 1,
            duration: Duration::from_millis(ms),
            error: None,
        };
        let avg = average_results(&[run(10), run(30)]).unwrap();
        assert_eq!(avg.duration, Duration::from_millis(20));
        assert!(average_results(&[]).is_none());
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
    }
}

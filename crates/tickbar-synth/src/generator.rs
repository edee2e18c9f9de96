//! Random-walk tick generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};
use tickbar_types::{Tick, UnixNanos};

/// Approximate bytes per generated record, for buffer pre-allocation.
const RECORD_SIZE_HINT: usize = 40;

/// Settings for a reproducible synthetic tick stream.
///
/// Starting from `start` and `start_price`, each tick advances time by a
/// uniform step, moves the price by a uniform step and draws a uniform volume.
/// Timestamps never decrease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickGenerator {
    seed: u64,
    start: UnixNanos,
    start_price: f64,
    min_gap_ns: i64,
    max_gap_ns: i64,
    max_price_step: f64,
    min_volume: i64,
    max_volume: i64,
}

impl Default for TickGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TickGenerator {
    /// Default seed.
    pub const DEFAULT_SEED: u64 = 123;

    /// Creates a generator: 2023-01-01T00:00:00Z, price 100.0, gaps of
    /// 1ms to 500ms, price steps within ±0.1, volumes 1 to 100.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            start: UnixNanos::new(1_672_531_200_000_000_000),
            start_price: 100.0,
            min_gap_ns: 1_000_000,
            max_gap_ns: 500_000_000,
            max_price_step: 0.1,
            min_volume: 1,
            max_volume: 100,
        }
    }

    /// Sets the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the timestamp the first gap is added to.
    #[must_use]
    pub const fn with_start(mut self, start: UnixNanos) -> Self {
        self.start = start;
        self
    }

    /// Sets the price the first step is applied to.
    #[must_use]
    pub const fn with_start_price(mut self, price: f64) -> Self {
        self.start_price = price;
        self
    }

    /// Sets the inclusive range of time gaps between ticks. Negative bounds
    /// are clamped to zero and the bounds are reordered if needed.
    #[must_use]
    pub const fn with_gap_ns(mut self, min: i64, max: i64) -> Self {
        let min = if min < 0 { 0 } else { min };
        let max = if max < 0 { 0 } else { max };
        if min <= max {
            self.min_gap_ns = min;
            self.max_gap_ns = max;
        } else {
            self.min_gap_ns = max;
            self.max_gap_ns = min;
        }
        self
    }

    /// Sets the largest absolute price move per tick.
    #[must_use]
    pub const fn with_max_price_step(mut self, step: f64) -> Self {
        self.max_price_step = step.abs();
        self
    }

    /// Sets the inclusive range of tick volumes. Bounds are reordered if needed.
    #[must_use]
    pub const fn with_volume(mut self, min: i64, max: i64) -> Self {
        if min <= max {
            self.min_volume = min;
            self.max_volume = max;
        } else {
            self.min_volume = max;
            self.max_volume = min;
        }
        self
    }

    /// Returns an infinite iterator of ticks.
    #[must_use]
    pub fn ticks(&self) -> Ticks {
        Ticks {
            settings: *self,
            rng: StdRng::seed_from_u64(self.seed),
            timestamp: self.start.as_i64(),
            price: self.start_price,
        }
    }

    /// Generates `count` records as a single text buffer.
    #[must_use]
    pub fn generate(&self, count: usize) -> String {
        let mut buffer = Vec::with_capacity(count.saturating_mul(RECORD_SIZE_HINT));
        for tick in self.ticks().take(count) {
            // Writing to a Vec cannot fail.
            let _ = write_tick(&mut buffer, &tick);
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Writes `count` records to `writer`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, mut writer: W, count: usize) -> io::Result<u64> {
        let mut written = 0;
        for tick in self.ticks().take(count) {
            written += write_tick(&mut writer, &tick)? as u64;
        }
        writer.flush()?;
        Ok(written)
    }
}

/// Iterator over generated ticks. Never ends.
#[derive(Debug, Clone)]
pub struct Ticks {
    settings: TickGenerator,
    rng: StdRng,
    timestamp: i64,
    price: f64,
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Self::Item> {
        let s = &self.settings;
        self.timestamp = self
            .timestamp
            .saturating_add(self.rng.gen_range(s.min_gap_ns..=s.max_gap_ns));
        self.price += self.rng.gen_range(-s.max_price_step..=s.max_price_step);
        let volume = self.rng.gen_range(s.min_volume..=s.max_volume);

        Some(Tick::new(UnixNanos::new(self.timestamp), self.price, volume))
    }
}

/// Writes one tick as `timestamp,price,volume\n`, with six price decimals.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_tick<W: Write>(mut writer: W, tick: &Tick) -> io::Result<usize> {
    let record = format!("{},{:.6},{}\n", tick.timestamp, tick.price, tick.volume);
    writer.write_all(record.as_bytes())?;
    Ok(record.len())
}

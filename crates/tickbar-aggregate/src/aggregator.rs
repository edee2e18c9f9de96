//! Streaming tick-to-OHLCV aggregation.

use std::cmp::Ordering;

use tickbar_types::{RecordError, Tick, UnixNanos};
use tracing::{trace, warn};

use crate::{AggregatorConfig, Candle, OrderingPolicy};

/// Streaming tick aggregator.
///
/// Folds ticks into candles of the configured bar duration. Buckets are the
/// half-open intervals `[k * D, (k + 1) * D)` measured from the Unix epoch, so a
/// tick exactly on a boundary opens the next candle. Buckets without ticks are
/// skipped, never padded.
#[derive(Debug, Clone)]
pub struct CandleAggregator {
    config: AggregatorConfig,
    current: Option<CandleBuilder>,
}

impl CandleAggregator {
    /// Creates a new aggregator with no candle in progress.
    #[must_use]
    pub const fn new(config: AggregatorConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Returns the configuration being aggregated with.
    #[must_use]
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Returns a snapshot of the candle currently being built, if any.
    #[must_use]
    pub fn in_progress(&self) -> Option<Candle> {
        self.current.map(CandleBuilder::finish)
    }

    /// Processes a tick, potentially emitting a completed candle.
    ///
    /// Returns `Ok(Some(candle))` when this tick starts a new bucket and so
    /// completes the previous one, `Ok(None)` otherwise.
    ///
    /// # Errors
    ///
    /// - [`RecordError::UnsortedInput`] if the tick precedes the open candle
    ///   and the policy is [`OrderingPolicy::Strict`].
    /// - [`RecordError::VolumeOverflow`] if the candle volume no longer fits.
    /// - [`RecordError::TimestampOutOfRange`] if the tick's bucket start is
    ///   unrepresentable.
    ///
    /// On error the aggregator is left exactly as it was before the call.
    pub fn push(&mut self, tick: Tick) -> Result<Option<Candle>, RecordError> {
        let bucket = tick
            .timestamp
            .checked_floor(self.config.bar_duration)
            .ok_or(RecordError::TimestampOutOfRange(tick.timestamp))?;

        let Some(current) = self.current.as_mut() else {
            // First tick
            self.current = Some(CandleBuilder::start(bucket, &tick));
            return Ok(None);
        };

        // For in-order ticks `bucket > open_time` is the same test as
        // `timestamp >= open_time + D`, without the overflow.
        match bucket.cmp(&current.open_time) {
            Ordering::Equal => {
                current.update(&tick)?;
                Ok(None)
            }
            Ordering::Greater => {
                let completed =
                    std::mem::replace(current, CandleBuilder::start(bucket, &tick)).finish();
                trace!(
                    open_time = %completed.open_time,
                    next_open_time = %bucket,
                    ticks = completed.tick_count,
                    "candle rollover"
                );
                Ok(Some(completed))
            }
            Ordering::Less => match self.config.ordering {
                OrderingPolicy::Strict => Err(RecordError::UnsortedInput {
                    timestamp: tick.timestamp,
                    open_time: current.open_time,
                }),
                OrderingPolicy::Lenient => {
                    warn!(
                        timestamp = %tick.timestamp,
                        open_time = %current.open_time,
                        "out-of-order tick folded into current candle"
                    );
                    current.update(&tick)?;
                    Ok(None)
                }
            },
        }
    }

    /// Finishes aggregation, returning any remaining partial candle.
    #[must_use]
    pub fn finish(self) -> Option<Candle> {
        self.current.map(CandleBuilder::finish)
    }
}

/// Accumulator for the candle in progress.
///
/// Replaced wholesale on rollover rather than reset field by field.
#[derive(Debug, Clone, Copy)]
struct CandleBuilder {
    open_time: UnixNanos,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: i64,
    tick_count: u64,
}

impl CandleBuilder {
    /// Starts a candle from the first tick of its bucket.
    const fn start(open_time: UnixNanos, tick: &Tick) -> Self {
        Self {
            open_time,
            open: tick.price,
            high: tick.price,
            low: tick.price,
            close: tick.price,
            volume: tick.volume,
            tick_count: 1,
        }
    }

    /// Folds a tick into the candle. Leaves `self` untouched on error.
    fn update(&mut self, tick: &Tick) -> Result<(), RecordError> {
        let volume = self
            .volume
            .checked_add(tick.volume)
            .ok_or(RecordError::VolumeOverflow {
                open_time: self.open_time,
            })?;

        self.high = self.high.max(tick.price);
        self.low = self.low.min(tick.price);
        self.close = tick.price;
        self.volume = volume;
        self.tick_count += 1;
        Ok(())
    }

    /// Freezes the accumulator into a candle.
    const fn finish(self) -> Candle {
        Candle::new(
            self.open_time,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.tick_count,
        )
    }
}

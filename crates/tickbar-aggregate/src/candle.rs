//! OHLCV (candlestick) data structure.

use serde::{Deserialize, Serialize};
use tickbar_types::{BarDuration, UnixNanos};

/// OHLCV bar (candlestick) data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket start, an exact multiple of the bar duration.
    pub open_time: UnixNanos,
    /// Price of the first tick in the bucket.
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Price of the last tick processed in the bucket.
    pub close: f64,
    /// Sum of tick volumes.
    pub volume: i64,
    /// Number of ticks in the bar.
    pub tick_count: u64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        open_time: UnixNanos,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: i64,
        tick_count: u64,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
            tick_count,
        }
    }

    /// Returns the exclusive end of the bucket, or `None` if it overflows.
    #[must_use]
    pub const fn close_time(&self, bar_duration: BarDuration) -> Option<UnixNanos> {
        self.open_time.checked_add(bar_duration)
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the typical price ((high + low + close) / 3).
    #[must_use]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

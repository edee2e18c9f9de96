//! Tick data representation.

use serde::{Deserialize, Serialize};

use crate::UnixNanos;

/// A single trade: when it happened, at what price and for how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Trade time in nanoseconds since the Unix epoch.
    pub timestamp: UnixNanos,
    /// Trade price.
    pub price: f64,
    /// Trade size. Not sign-checked.
    pub volume: i64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(timestamp: UnixNanos, price: f64, volume: i64) -> Self {
        Self {
            timestamp,
            price,
            volume,
        }
    }
}

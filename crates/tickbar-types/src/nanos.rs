//! Nanosecond timestamps relative to the Unix epoch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::BarDuration;

/// Nanoseconds since the Unix epoch (1970-01-01T00:00:00Z).
///
/// This is the only timestamp representation used for bucket arithmetic.
/// Calendar conversion is available through [`UnixNanos::to_datetime`] for
/// presentation, but aggregation never depends on it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UnixNanos(i64);

impl UnixNanos {
    /// The epoch itself.
    pub const EPOCH: Self = Self(0);

    /// Creates a timestamp from raw nanoseconds.
    #[must_use]
    pub const fn new(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Creates a timestamp from whole seconds, saturating at the `i64` range.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1_000_000_000))
    }

    /// Returns the raw nanosecond count.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns the start of the bucket of width `duration` containing this
    /// timestamp, i.e. `floor(self / duration) * duration`.
    ///
    /// Flooring is Euclidean, so timestamps before the epoch still map to the
    /// lower multiple. Returns `None` only when that multiple lies below
    /// `i64::MIN`.
    #[must_use]
    pub const fn checked_floor(self, duration: BarDuration) -> Option<Self> {
        let width = duration.as_nanos_i64();
        match self.0.checked_sub(self.0.rem_euclid(width)) {
            Some(start) => Some(Self(start)),
            None => None,
        }
    }

    /// Adds a bar duration, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, duration: BarDuration) -> Option<Self> {
        match self.0.checked_add(duration.as_nanos_i64()) {
            Some(nanos) => Some(Self(nanos)),
            None => None,
        }
    }

    /// Converts to a UTC calendar time.
    #[must_use]
    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.0)
    }
}

impl From<i64> for UnixNanos {
    fn from(nanos: i64) -> Self {
        Self(nanos)
    }
}

impl From<UnixNanos> for i64 {
    fn from(ts: UnixNanos) -> Self {
        ts.0
    }
}

impl std::fmt::Display for UnixNanos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

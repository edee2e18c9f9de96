//! Candle width definitions.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::str::FromStr;
use std::time::Duration;

use crate::BarDurationError;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: u64 = 24 * NANOS_PER_HOUR;

/// Display units, largest first.
const UNITS: &[(&str, u64)] = &[
    ("d", NANOS_PER_DAY),
    ("h", NANOS_PER_HOUR),
    ("m", NANOS_PER_MINUTE),
    ("s", NANOS_PER_SECOND),
    ("ms", NANOS_PER_MILLI),
    ("us", NANOS_PER_MICRO),
    ("ns", 1),
];

/// Fixed width of a candle bucket.
///
/// Always positive and at most `i64::MAX` nanoseconds, so bucket arithmetic on
/// [`UnixNanos`](crate::UnixNanos) never needs a sign check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BarDuration(NonZeroU64);

impl BarDuration {
    /// One second.
    pub const ONE_SECOND: Self = Self(NonZeroU64::new(NANOS_PER_SECOND).unwrap());
    /// One minute.
    pub const ONE_MINUTE: Self = Self(NonZeroU64::new(NANOS_PER_MINUTE).unwrap());
    /// One hour.
    pub const ONE_HOUR: Self = Self(NonZeroU64::new(NANOS_PER_HOUR).unwrap());
    /// One day.
    pub const ONE_DAY: Self = Self(NonZeroU64::new(NANOS_PER_DAY).unwrap());

    /// Creates a bar duration from nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `nanos` is zero or exceeds `i64::MAX`.
    pub const fn from_nanos(nanos: u64) -> Result<Self, BarDurationError> {
        if nanos > i64::MAX as u64 {
            return Err(BarDurationError::Overflow);
        }
        match NonZeroU64::new(nanos) {
            Some(nanos) => Ok(Self(nanos)),
            None => Err(BarDurationError::Zero),
        }
    }

    /// Creates a bar duration from milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration is zero or overflows.
    pub const fn from_millis(millis: u64) -> Result<Self, BarDurationError> {
        match millis.checked_mul(NANOS_PER_MILLI) {
            Some(nanos) => Self::from_nanos(nanos),
            None => Err(BarDurationError::Overflow),
        }
    }

    /// Creates a bar duration from seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration is zero or overflows.
    pub const fn from_secs(secs: u64) -> Result<Self, BarDurationError> {
        match secs.checked_mul(NANOS_PER_SECOND) {
            Some(nanos) => Self::from_nanos(nanos),
            None => Err(BarDurationError::Overflow),
        }
    }

    /// Returns the width in nanoseconds.
    #[must_use]
    pub const fn as_nanos(&self) -> u64 {
        self.0.get()
    }

    /// Returns the width in nanoseconds as a signed value for timestamp arithmetic.
    #[must_use]
    pub const fn as_nanos_i64(&self) -> i64 {
        // Construction guarantees the value fits.
        self.0.get() as i64
    }

    /// Converts to a standard library duration.
    #[must_use]
    pub const fn as_std(&self) -> Duration {
        Duration::from_nanos(self.0.get())
    }
}

impl TryFrom<Duration> for BarDuration {
    type Error = BarDurationError;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        let nanos = u64::try_from(duration.as_nanos()).map_err(|_| BarDurationError::Overflow)?;
        Self::from_nanos(nanos)
    }
}

impl std::fmt::Display for BarDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let nanos = self.as_nanos();
        let (suffix, scale) = UNITS
            .iter()
            .copied()
            .find(|(_, scale)| nanos.is_multiple_of(*scale))
            .unwrap_or(("ns", 1));
        write!(f, "{}{suffix}", nanos / scale)
    }
}

impl FromStr for BarDuration {
    type Err = BarDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        // Named timeframes.
        let named = match lower.as_str() {
            "s1" | "second" => Some(NANOS_PER_SECOND),
            "m1" | "minute" => Some(NANOS_PER_MINUTE),
            "m5" => Some(5 * NANOS_PER_MINUTE),
            "m15" => Some(15 * NANOS_PER_MINUTE),
            "m30" => Some(30 * NANOS_PER_MINUTE),
            "h1" | "hour" => Some(NANOS_PER_HOUR),
            "h4" => Some(4 * NANOS_PER_HOUR),
            "d1" | "day" | "daily" => Some(NANOS_PER_DAY),
            _ => None,
        };
        if let Some(nanos) = named {
            return Self::from_nanos(nanos);
        }

        let split = lower
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(lower.len());
        let (digits, unit) = lower.split_at(split);
        if digits.is_empty() {
            return Err(BarDurationError::Invalid(s.to_string()));
        }

        let scale = match unit {
            "" | "s" | "sec" | "secs" => NANOS_PER_SECOND,
            "ns" => 1,
            "us" | "µs" => NANOS_PER_MICRO,
            "ms" => NANOS_PER_MILLI,
            "m" | "min" | "mins" => NANOS_PER_MINUTE,
            "h" | "hr" | "hrs" => NANOS_PER_HOUR,
            "d" => NANOS_PER_DAY,
            _ => return Err(BarDurationError::Invalid(s.to_string())),
        };

        let count: u64 = digits.parse().map_err(|_| BarDurationError::Overflow)?;
        let nanos = count
            .checked_mul(scale)
            .ok_or(BarDurationError::Overflow)?;
        Self::from_nanos(nanos)
    }
}

impl TryFrom<String> for BarDuration {
    type Error = BarDurationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BarDuration> for String {
    fn from(duration: BarDuration) -> Self {
        duration.to_string()
    }
}

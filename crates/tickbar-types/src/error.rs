//! Error types for tickbar.

use thiserror::Error;

use crate::UnixNanos;

/// Reasons a single tick record cannot be accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Fewer than two delimiters, so the line cannot be split into three fields.
    #[error("Malformed record: expected 3 comma-separated fields, found {fields}")]
    MalformedRecord {
        /// Number of fields actually present.
        fields: usize,
    },

    /// Timestamp field is not a complete integer.
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Price field is not a complete, finite floating-point number.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Volume field is not a complete integer.
    #[error("Invalid volume: {0:?}")]
    InvalidVolume(String),

    /// Tick is earlier than the start of the candle currently being built.
    #[error("Unsorted input: tick at {timestamp} precedes open candle at {open_time}")]
    UnsortedInput {
        /// Timestamp of the offending tick.
        timestamp: UnixNanos,
        /// Open time of the in-progress candle.
        open_time: UnixNanos,
    },

    /// Timestamp is so close to `i64::MIN` that its bucket start is unrepresentable.
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(UnixNanos),

    /// Summing volumes overflowed the candle's volume counter.
    #[error("Volume overflow in candle opened at {open_time}")]
    VolumeOverflow {
        /// Open time of the candle whose volume overflowed.
        open_time: UnixNanos,
    },
}

/// Position of a record within the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// 1-based line number.
    pub line: usize,
    /// Byte offset of the line's first byte.
    pub offset: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub const fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} (byte {})", self.line, self.offset)
    }
}

/// Error for invalid bar durations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BarDurationError {
    /// Bar duration must be positive.
    #[error("Bar duration must be greater than zero")]
    Zero,

    /// Bar duration does not fit in signed 64-bit nanoseconds.
    #[error("Bar duration overflows 64-bit nanoseconds")]
    Overflow,

    /// String is not a recognised duration.
    #[error("Invalid bar duration '{0}', expected e.g. 13s, 500ms, 5m, h1")]
    Invalid(String),
}

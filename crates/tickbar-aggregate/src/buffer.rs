//! Whole-buffer aggregation passes.

use tickbar_parse::{Lines, parse_line};
use tickbar_types::{BarDuration, Location, RecordError, Tick};
use tracing::debug;

use crate::{AggregateError, AggregatorConfig, Candle, CandleAggregator};

/// Aggregates raw tick buffers into candles.
///
/// Holds only configuration. Every call to [`Aggregator::aggregate`] starts
/// from an empty candle, so one instance can serve any number of
/// independent buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    /// Creates an aggregator with the given configuration.
    #[must_use]
    pub const fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Aggregates a buffer of `timestamp,price,volume` lines.
    ///
    /// Blank lines are skipped. The output is ordered by strictly increasing
    /// `open_time`.
    ///
    /// # Errors
    ///
    /// Returns an [`AggregateError`] for the first line that fails to parse or
    /// violates the ordering policy. The error carries the line's location and
    /// the candles completed before it.
    pub fn aggregate(&self, buffer: &[u8]) -> Result<Vec<Candle>, AggregateError> {
        let records = Lines::new(buffer)
            .map(|record| (record.location, parse_line(record.bytes)));
        let candles = self.fold(records)?;

        debug!(
            bytes = buffer.len(),
            candles = candles.len(),
            bar_duration = %self.config.bar_duration,
            "aggregated buffer"
        );
        Ok(candles)
    }

    /// Aggregates already-parsed ticks.
    ///
    /// Error locations report the tick's 1-based position in the sequence as
    /// the line, with a zero byte offset.
    ///
    /// # Errors
    ///
    /// Returns an [`AggregateError`] for the first tick that violates the
    /// ordering policy or overflows the candle volume.
    pub fn aggregate_ticks<I>(&self, ticks: I) -> Result<Vec<Candle>, AggregateError>
    where
        I: IntoIterator<Item = Tick>,
    {
        let records = ticks
            .into_iter()
            .enumerate()
            .map(|(index, tick)| (Location::new(index + 1, 0), Ok(tick)));
        self.fold(records)
    }

    fn fold<I>(&self, records: I) -> Result<Vec<Candle>, AggregateError>
    where
        I: Iterator<Item = (Location, Result<Tick, RecordError>)>,
    {
        let mut aggregator = CandleAggregator::new(self.config);
        let mut candles = Vec::new();

        for (location, record) in records {
            match record.and_then(|tick| aggregator.push(tick)) {
                Ok(Some(candle)) => candles.push(candle),
                Ok(None) => {}
                Err(source) => {
                    debug!(%location, error = %source, completed = candles.len(), "aggregation aborted");
                    return Err(AggregateError::new(location, source, candles));
                }
            }
        }

        candles.extend(aggregator.finish());
        Ok(candles)
    }
}

impl From<AggregatorConfig> for Aggregator {
    fn from(config: AggregatorConfig) -> Self {
        Self::new(config)
    }
}

/// Aggregates a tick buffer with the default (strict) ordering policy.
///
/// # Errors
///
/// See [`Aggregator::aggregate`].
pub fn aggregate(buffer: &[u8], bar_duration: BarDuration) -> Result<Vec<Candle>, AggregateError> {
    Aggregator::new(AggregatorConfig::new(bar_duration)).aggregate(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrderingPolicy;
    use tickbar_types::UnixNanos;

    /// Multiple of 13 seconds.
    const BASE_NS: i64 = 1_672_531_198_000_000_000;
    const SECOND: i64 = 1_000_000_000;

    fn thirteen_seconds() -> BarDuration {
        BarDuration::from_secs(13).unwrap()
    }

    fn line(offset_secs: i64, price: &str, volume: i64) -> String {
        format!("{},{price},{volume}\n", BASE_NS + offset_secs * SECOND)
    }

    fn end_to_end_buffer() -> String {
        [
            line(0, "100.0", 10),
            line(1, "102.5", 5),
            line(12, "99.0", 8),
            line(13, "105.0", 12),
            line(15, "106.0", 20),
        ]
        .concat()
    }

    #[test]
    fn test_end_to_end_example() {
        let candles = aggregate(end_to_end_buffer().as_bytes(), thirteen_seconds()).unwrap();

        assert_eq!(
            candles,
            vec![
                Candle::new(UnixNanos::new(BASE_NS), 100.0, 102.5, 99.0, 99.0, 23, 3),
                Candle::new(UnixNanos::new(BASE_NS + 13 * SECOND), 105.0, 106.0, 105.0, 106.0, 32, 2),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(b"", thirteen_seconds()).unwrap().is_empty());
        assert!(aggregate(b"\n\n\n", thirteen_seconds()).unwrap().is_empty());
    }

    #[test]
    fn test_single_tick() {
        let buffer = line(7, "100.0", 10);
        let candles = aggregate(buffer.as_bytes(), thirteen_seconds()).unwrap();

        assert_eq!(
            candles,
            vec![Candle::new(UnixNanos::new(BASE_NS), 100.0, 100.0, 100.0, 100.0, 10, 1)]
        );
    }

    #[test]
    fn test_missing_trailing_newline_and_blank_lines() {
        let buffer = end_to_end_buffer().replace('\n', "\n\n");
        let buffer = buffer.trim_end();
        let candles = aggregate(buffer.as_bytes(), thirteen_seconds()).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].volume, 32);
    }

    #[test]
    fn test_sparse_over_empty_buckets() {
        let buffer = [line(0, "1.0", 1), line(100, "2.0", 1)].concat();
        let candles = aggregate(buffer.as_bytes(), thirteen_seconds()).unwrap();

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].open_time, UnixNanos::new(BASE_NS + 91 * SECOND));
    }

    #[test]
    fn test_parse_error_carries_location_and_partial() {
        let buffer = [
            line(0, "100.0", 10),
            line(13, "101.0", 10),
            "bogus\n".to_string(),
            line(14, "102.0", 10),
        ]
        .concat();
        let err = aggregate(buffer.as_bytes(), thirteen_seconds()).unwrap_err();

        assert_eq!(err.location().line, 3);
        assert_eq!(err.location().offset, buffer.find("bogus").unwrap());
        assert_eq!(err.record_error(), &RecordError::MalformedRecord { fields: 1 });
        assert_eq!(err.partial().len(), 1);
        assert_eq!(err.into_partial()[0].volume, 10);
    }

    #[test]
    fn test_invalid_field_aborts() {
        let buffer = [line(0, "100.0", 10), line(1, "abc", 1)].concat();
        let err = aggregate(buffer.as_bytes(), thirteen_seconds()).unwrap_err();
        assert_eq!(err.record_error(), &RecordError::InvalidPrice("abc".to_string()));
        assert!(err.partial().is_empty());
        assert!(err.to_string().starts_with("line 2 (byte "));
    }

    #[test]
    fn test_unsorted_input_strict_and_lenient() {
        let buffer = [line(13, "100.0", 1), line(0, "90.0", 1)].concat();

        let err = aggregate(buffer.as_bytes(), thirteen_seconds()).unwrap_err();
        assert!(matches!(err.record_error(), RecordError::UnsortedInput { .. }));
        assert_eq!(err.location().line, 2);

        let lenient = Aggregator::new(
            AggregatorConfig::new(thirteen_seconds()).with_ordering(OrderingPolicy::Lenient),
        );
        let candles = lenient.aggregate(buffer.as_bytes()).unwrap();
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].volume, 2);
    }

    #[test]
    fn test_aggregator_is_reusable() {
        let aggregator = Aggregator::new(AggregatorConfig::new(thirteen_seconds()));
        let buffer = end_to_end_buffer();

        let first = aggregator.aggregate(buffer.as_bytes()).unwrap();
        let second = aggregator.aggregate(buffer.as_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_ticks_matches_buffer() {
        let aggregator = Aggregator::new(AggregatorConfig::new(thirteen_seconds()));
        let ticks = vec![
            Tick::new(UnixNanos::new(BASE_NS), 100.0, 10),
            Tick::new(UnixNanos::new(BASE_NS + SECOND), 102.5, 5),
            Tick::new(UnixNanos::new(BASE_NS + 12 * SECOND), 99.0, 8),
            Tick::new(UnixNanos::new(BASE_NS + 13 * SECOND), 105.0, 12),
            Tick::new(UnixNanos::new(BASE_NS + 15 * SECOND), 106.0, 20),
        ];

        assert_eq!(
            aggregator.aggregate_ticks(ticks).unwrap(),
            aggregator.aggregate(end_to_end_buffer().as_bytes()).unwrap()
        );
    }

    #[test]
    fn test_aggregate_ticks_error_position() {
        let aggregator = Aggregator::new(AggregatorConfig::new(thirteen_seconds()));
        let ticks = [
            Tick::new(UnixNanos::new(BASE_NS + 20 * SECOND), 1.0, 1),
            Tick::new(UnixNanos::new(BASE_NS), 1.0, 1),
        ];
        let err = aggregator.aggregate_ticks(ticks).unwrap_err();
        assert_eq!(err.location(), Location::new(2, 0));
    }
}

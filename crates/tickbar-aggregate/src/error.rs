//! Aggregation failure.

use thiserror::Error;
use tickbar_types::{Location, RecordError};

use crate::Candle;

/// A pass aborted on a faulty record.
///
/// Carries the candles completed before the fault for diagnostics. The candle
/// that was in progress when the fault occurred is not included.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{location}: {source}")]
pub struct AggregateError {
    location: Location,
    source: RecordError,
    partial: Vec<Candle>,
}

impl AggregateError {
    pub(crate) const fn new(location: Location, source: RecordError, partial: Vec<Candle>) -> Self {
        Self {
            location,
            source,
            partial,
        }
    }

    /// Returns where the faulty record starts.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Returns what was wrong with the record.
    #[must_use]
    pub const fn record_error(&self) -> &RecordError {
        &self.source
    }

    /// Returns the candles completed before the fault.
    #[must_use]
    pub fn partial(&self) -> &[Candle] {
        &self.partial
    }

    /// Consumes the error, returning the candles completed before the fault.
    #[must_use]
    pub fn into_partial(self) -> Vec<Candle> {
        self.partial
    }
}

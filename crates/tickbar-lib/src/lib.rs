//! Tick-to-candle aggregation.
//!
//! This is a facade crate that re-exports functionality from the tickbar
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use tickbar_lib::prelude::*;
//!
//! let aggregator = Aggregator::new(
//!     AggregatorConfig::new(BarDuration::ONE_MINUTE).with_ordering(OrderingPolicy::Strict),
//! );
//! let candles = aggregator.aggregate(b"60000000000,1.5,2\n60500000000,1.25,3\n")?;
//!
//! assert_eq!(candles[0].open_time, UnixNanos::from_secs(60));
//! assert_eq!(candles[0].volume, 5);
//! # Ok::<(), AggregateError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tickbar_types::*;

// Re-export record parsing
pub use tickbar_parse::{DELIMITER, Lines, ParseError, Record, parse_line, parse_ticks};

// Re-export aggregation
pub use tickbar_aggregate::{
    AggregateError, Aggregator, AggregatorConfig, Candle, CandleAggregator, OrderingPolicy,
    aggregate,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use tickbar_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TextFormatter,
    TimestampStyle,
};

// Re-export synthetic data
#[cfg(feature = "synth")]
pub use tickbar_synth::{TickGenerator, Ticks, write_tick};

/// Prelude module for convenient imports.
///
/// ```
/// use tickbar_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickbar_types::{BarDuration, Location, RecordError, Tick, UnixNanos};

    pub use tickbar_aggregate::{
        AggregateError, Aggregator, AggregatorConfig, Candle, CandleAggregator, OrderingPolicy,
        aggregate,
    };

    #[cfg(feature = "format")]
    pub use tickbar_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat, TextFormatter};

    #[cfg(feature = "synth")]
    pub use tickbar_synth::TickGenerator;
}

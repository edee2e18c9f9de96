//! Core types for the tickbar tick-to-candle aggregator.
//!
//! This crate provides the fundamental data structures used throughout tickbar:
//!
//! - [`UnixNanos`] - Nanoseconds since the Unix epoch
//! - [`Tick`] - A single trade with timestamp, price and volume
//! - [`BarDuration`] - Fixed candle width used for bucketing
//! - [`RecordError`] - Why a single input record was rejected
//! - [`Location`] - Where in the input buffer a record starts

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar_duration;
mod error;
mod nanos;
mod tick;

pub use bar_duration::BarDuration;
pub use error::{BarDurationError, Location, RecordError};
pub use nanos::UnixNanos;
pub use tick::Tick;

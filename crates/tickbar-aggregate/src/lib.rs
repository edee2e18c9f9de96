//! OHLCV aggregation for tickbar.
//!
//! This crate provides tick-to-candle aggregation:
//!
//! - [`Candle`] - OHLCV bar data structure
//! - [`CandleAggregator`] - Streaming, push-based aggregator
//! - [`Aggregator`] - Whole-buffer aggregation pass over raw tick records
//! - [`AggregatorConfig`] - Bar duration and ordering policy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod buffer;
mod candle;
mod config;
mod error;

pub use aggregator::CandleAggregator;
pub use buffer::{Aggregator, aggregate};
pub use candle::Candle;
pub use config::{AggregatorConfig, OrderingPolicy};
pub use error::AggregateError;

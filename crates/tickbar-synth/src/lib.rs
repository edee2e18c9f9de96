//! Synthetic tick streams for tickbar.
//!
//! - [`TickGenerator`] - Seeded random-walk generator settings
//! - [`Ticks`] - Infinite iterator of generated ticks
//! - [`write_tick`] - Writes one tick in the input record format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod generator;

pub use generator::{TickGenerator, Ticks, write_tick};

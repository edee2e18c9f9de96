//! Tick record parsing for tickbar.
//!
//! This crate turns a raw text buffer into ticks:
//!
//! - [`Lines`] - Zero-copy scanner over non-empty newline-delimited records
//! - [`parse_line`] - Strict parser for a single `timestamp,price,volume` record
//! - [`parse_ticks`] - Both of the above, yielding located ticks or errors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod lines;
mod parse;

pub use lines::{Lines, Record};
pub use parse::{DELIMITER, ParseError, parse_line, parse_ticks};

//! Core types for the countypop county population lookup.
//!
//! This crate provides the data structures shared by the other countypop crates:
//!
//! - [`CountyRecord`] - One county-year population observation
//! - [`Population`] - A finite, non-negative population count
//! - [`QueryError`] - Failures raised by the query engine
//! - [`PopulationError`] - Failures coercing a raw population value

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/countypop/countypop/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod population;
mod record;

pub use error::{PopulationError, QueryError, Result};
pub use population::Population;
pub use record::CountyRecord;

//! County query engine for countypop.
//!
//! - [`CountyQuery`] - Owns a record list and queries it
//! - [`filter_by_year`] - Year filter over any record slice
//! - [`average_population`] - Mean population over any record slice
//! - [`find_closest_by_population`] - Closest-population search with a margin
//! - [`ClosestMatch`] - Options for the closest-population search
//!
//! # Example
//!
//! ```
//! use countypop_query::{ClosestMatch, CountyQuery};
//! use countypop_types::{CountyRecord, Population};
//!
//! let records = vec![
//!     CountyRecord::new("a", "A County", 2020, Population::new(1_000.0).unwrap(), "a"),
//!     CountyRecord::new("b", "B County", 2020, Population::new(1_200.0).unwrap(), "b"),
//! ];
//! let query = CountyQuery::new(records);
//!
//! let closest = query
//!     .find_closest_by_population(ClosestMatch::new().with_target(1_050.0))
//!     .unwrap();
//! assert_eq!(closest.county(), "A County");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/countypop/countypop/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod ops;

pub use engine::CountyQuery;
pub use ops::{
    ClosestMatch, DEFAULT_MAX_ABS_DISTANCE, average_population, filter_by_year,
    find_closest_by_population,
};

//! Find the county whose population is closest to a target.
//!
//! This is a facade crate that re-exports functionality from the countypop
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use countypop_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpSource::with_defaults()?;
//!     let query = CountyQuery::new(source.load().await?);
//!
//!     let year = query.for_year(2020)?;
//!     let closest = year.find_closest_by_population(ClosestMatch::new())?;
//!     println!("{}: {}", closest.county(), closest.population());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/countypop/countypop/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use countypop_types::*;

// Re-export the query engine
pub use countypop_query::{
    ClosestMatch, CountyQuery, DEFAULT_MAX_ABS_DISTANCE, average_population, filter_by_year,
    find_closest_by_population,
};

// Re-export record sources
#[cfg(feature = "fetch")]
pub use countypop_fetch::{
    ClientConfig, DecodeError, FetchClient, FetchError, FileSource, HttpSource, RecordSource,
    decode_records, url,
};

/// Prelude module for convenient imports.
///
/// ```
/// use countypop_lib::prelude::*;
/// ```
pub mod prelude {
    pub use countypop_types::{CountyRecord, Population, PopulationError, QueryError};

    pub use countypop_query::{ClosestMatch, CountyQuery};

    #[cfg(feature = "fetch")]
    pub use countypop_fetch::{
        ClientConfig, FetchClient, FetchError, FileSource, HttpSource, RecordSource,
        url::DEFAULT_ENDPOINT,
    };
}

//! Closest command implementation.
//!
//! Filters the loaded records to one year and prints the county whose
//! population is closest to the target.

use crate::display::{Format, render_record};
use anyhow::Result;
use countypop_lib::prelude::*;

/// Find and print the county closest to `target` (or the year's average).
pub(crate) fn closest(
    query: &CountyQuery,
    year: i32,
    margin: f64,
    target: Option<f64>,
    format: Format,
) -> Result<()> {
    let mut options = ClosestMatch::new().with_max_abs_distance(margin);
    if let Some(target) = target {
        options = options.with_target(target);
    }

    let year_query = query.for_year(year)?;
    let record = year_query.find_closest_by_population(options)?;
    println!("{}", render_record(record, format)?);
    Ok(())
}

//! Average command implementation.

use anyhow::Result;
use countypop_lib::prelude::*;

/// Print the average county population for `year`.
pub(crate) fn average(query: &CountyQuery, year: i32) -> Result<()> {
    let year_query = query.for_year(year)?;
    let average = year_query.average_population()?;
    println!(
        "Average population of {} counties in {}: {:.2}",
        year_query.len(),
        year,
        average
    );
    Ok(())
}

//! List command implementation.

use crate::display::render_table;
use anyhow::Result;
use countypop_lib::prelude::*;

/// List loaded records, optionally only those for one year.
pub(crate) fn list_records(query: &CountyQuery, year: Option<i32>) -> Result<()> {
    let records = match year {
        Some(year) => query.filter_by_year(year)?,
        None => query.records().to_vec(),
    };

    print!("{}", render_table(&records));
    println!("\nTotal: {} records", records.len());
    Ok(())
}

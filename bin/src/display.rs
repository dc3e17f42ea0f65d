//! Display utilities and output formatting for the countypop CLI.

use anyhow::Result;
use clap::ValueEnum;
use countypop_lib::prelude::*;

/// Output format for a matched record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Json,
    Pretty,
    Table,
}

/// Renders a single record in the given format.
pub(crate) fn render_record(record: &CountyRecord, format: Format) -> Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string(record)?,
        Format::Pretty => serde_json::to_string_pretty(record)?,
        Format::Table => render_table(std::slice::from_ref(record)),
    })
}

/// Renders records as a fixed-width table.
pub(crate) fn render_table(records: &[CountyRecord]) -> String {
    let mut out = format!(
        "{:<14} {:<40} {:>6} {:>12}\n",
        "ID", "COUNTY", "YEAR", "POPULATION"
    );
    out.push_str(&"-".repeat(75));
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "{:<14} {:<40} {:>6} {:>12}\n",
            record.county_id(),
            record.county(),
            record.year(),
            record.population()
        ));
    }

    out
}

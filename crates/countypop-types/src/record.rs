//! County population records.

use serde::{Deserialize, Serialize};

use crate::Population;

/// A single county-year population observation.
///
/// Field names on the wire follow the DataUSA API (`"ID County"`,
/// `"Population"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    /// County identifier (e.g., "05000US01001").
    #[serde(rename = "ID County")]
    county_id: String,
    /// Display name (e.g., "Autauga County, AL").
    #[serde(rename = "County")]
    county: String,
    /// Numeric year identifier.
    #[serde(rename = "ID Year")]
    year_id: i32,
    /// Year as displayed by the API.
    #[serde(rename = "Year")]
    year: String,
    /// Population count.
    #[serde(rename = "Population")]
    population: Population,
    /// URL slug (e.g., "autauga-county-al").
    #[serde(rename = "Slug County")]
    slug: String,
}

impl CountyRecord {
    /// Creates a new record. The display year is derived from `year_id`.
    #[must_use]
    pub fn new(
        county_id: impl Into<String>,
        county: impl Into<String>,
        year_id: i32,
        population: Population,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            county_id: county_id.into(),
            county: county.into(),
            year_id,
            year: year_id.to_string(),
            population,
            slug: slug.into(),
        }
    }

    /// Overrides the display year, for rows where the API labels a year
    /// differently from its numeric identifier.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Returns the county identifier.
    #[must_use]
    pub fn county_id(&self) -> &str {
        &self.county_id
    }

    /// Returns the county display name.
    #[must_use]
    pub fn county(&self) -> &str {
        &self.county
    }

    /// Returns the numeric year identifier.
    #[must_use]
    pub const fn year_id(&self) -> i32 {
        self.year_id
    }

    /// Returns the year as displayed by the API.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the population.
    #[must_use]
    pub const fn population(&self) -> Population {
        self.population
    }

    /// Returns the URL slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

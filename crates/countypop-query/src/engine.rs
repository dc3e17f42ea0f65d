//! The county query engine.

use countypop_types::{CountyRecord, Result};

use crate::{ClosestMatch, average_population, filter_by_year, find_closest_by_population};

/// Owns a loaded list of county records and answers queries over it.
///
/// The records are set once at construction and never modified. To query a
/// different list, use the free functions in this crate or build a new
/// engine (see [`CountyQuery::for_year`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountyQuery {
    records: Vec<CountyRecord>,
}

impl CountyQuery {
    /// Creates an engine over the given records.
    #[must_use]
    pub const fn new(records: Vec<CountyRecord>) -> Self {
        Self { records }
    }

    /// Returns all held records, in load order.
    #[must_use]
    pub fn records(&self) -> &[CountyRecord] {
        &self.records
    }

    /// Consumes the engine, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<CountyRecord> {
        self.records
    }

    /// Returns the number of held records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the engine holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the distinct year identifiers present, sorted ascending.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(CountyRecord::year_id).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Returns the held records for `year`, in load order.
    ///
    /// # Errors
    ///
    /// Returns [`countypop_types::QueryError::NoRecordsForYear`] if none match.
    pub fn filter_by_year(&self, year: i32) -> Result<Vec<CountyRecord>> {
        filter_by_year(&self.records, year)
    }

    /// Returns a new engine over the held records for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`countypop_types::QueryError::NoRecordsForYear`] if none match.
    pub fn for_year(&self, year: i32) -> Result<Self> {
        self.filter_by_year(year).map(Self::new)
    }

    /// Returns the average population of the held records.
    ///
    /// # Errors
    ///
    /// Returns [`countypop_types::QueryError::EmptyInput`] if the engine is empty.
    pub fn average_population(&self) -> Result<f64> {
        average_population(&self.records)
    }

    /// Finds the held record closest to the target population.
    ///
    /// See [`find_closest_by_population`] for the search rules.
    ///
    /// # Errors
    ///
    /// Fails on an invalid margin or target, an empty engine, or when no
    /// record lies within the margin.
    pub fn find_closest_by_population(&self, options: ClosestMatch) -> Result<&CountyRecord> {
        find_closest_by_population(&self.records, options)
    }
}

impl From<Vec<CountyRecord>> for CountyQuery {
    fn from(records: Vec<CountyRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<CountyRecord> for CountyQuery {
    fn from_iter<I: IntoIterator<Item = CountyRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

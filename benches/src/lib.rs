//! Benchmark utilities for countypop.

use countypop_types::{CountyRecord, Population};

/// Configuration for a synthetic county list.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Number of counties per year.
    pub counties: usize,
    /// First year (inclusive).
    pub first_year: i32,
    /// Last year (inclusive).
    pub last_year: i32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        // Roughly the size of the DataUSA county table for one drilldown
        Self {
            counties: 3_200,
            first_year: 2013,
            last_year: 2020,
        }
    }
}

impl DatasetConfig {
    /// Total number of records this configuration produces.
    pub fn len(&self) -> usize {
        let years = (self.last_year - self.first_year + 1).max(0) as usize;
        self.counties * years
    }

    /// Returns true if the configuration produces no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generates a deterministic county list, grouped by year.
pub fn synthetic_counties(config: &DatasetConfig) -> Vec<CountyRecord> {
    let mut records = Vec::with_capacity(config.len());
    for year in config.first_year..=config.last_year {
        for i in 0..config.counties {
            // Spread populations between 1k and ~1M
            let population = 1_000 + (i as u64 * 7_919 + year as u64 * 104_729) % 999_000;
            records.push(CountyRecord::new(
                format!("05000US{i:05}"),
                format!("County {i}"),
                year,
                Population::new(population as f64).expect("generated population is valid"),
                format!("county-{i}"),
            ));
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_counties_len() {
        let config = DatasetConfig {
            counties: 10,
            first_year: 2019,
            last_year: 2020,
        };
        let records = synthetic_counties(&config);
        assert_eq!(records.len(), config.len());
        assert_eq!(records[0].year_id(), 2019);
        assert_eq!(records[19].year_id(), 2020);
    }
}

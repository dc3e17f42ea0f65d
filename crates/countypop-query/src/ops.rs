//! Linear-scan query operations over county records.

use countypop_types::{CountyRecord, QueryError, Result};

/// Default maximum absolute distance between target and match.
pub const DEFAULT_MAX_ABS_DISTANCE: f64 = 100.0;

/// Options for [`find_closest_by_population`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestMatch {
    /// Population to center the search on. `None` or a negative value means
    /// the average population of the searched records.
    pub target: Option<f64>,
    /// Largest tolerated absolute distance between target and match.
    pub max_abs_distance: f64,
}

impl Default for ClosestMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ClosestMatch {
    /// Creates options targeting the average with the default margin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: None,
            max_abs_distance: DEFAULT_MAX_ABS_DISTANCE,
        }
    }

    /// Sets an explicit target population.
    #[must_use]
    pub const fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the maximum absolute distance.
    #[must_use]
    pub const fn with_max_abs_distance(mut self, max_abs_distance: f64) -> Self {
        self.max_abs_distance = max_abs_distance;
        self
    }
}

/// Returns the records whose year identifier equals `year`, in their
/// original order.
///
/// # Errors
///
/// Returns [`QueryError::NoRecordsForYear`] if no record matches.
pub fn filter_by_year(records: &[CountyRecord], year: i32) -> Result<Vec<CountyRecord>> {
    let matching: Vec<CountyRecord> = records
        .iter()
        .filter(|record| record.year_id() == year)
        .cloned()
        .collect();

    if matching.is_empty() {
        return Err(QueryError::NoRecordsForYear { year });
    }

    tracing::debug!(year, count = matching.len(), "filtered records by year");
    Ok(matching)
}

/// Returns the arithmetic mean of the records' populations.
///
/// # Errors
///
/// Returns [`QueryError::EmptyInput`] if `records` is empty.
pub fn average_population(records: &[CountyRecord]) -> Result<f64> {
    if records.is_empty() {
        return Err(QueryError::EmptyInput);
    }

    let total: f64 = records.iter().map(|r| r.population().get()).sum();
    Ok(total / records.len() as f64)
}

/// Finds the record whose population is closest to the target.
///
/// The scan keeps the first record as the running best and only replaces it
/// when a later record is strictly closer, so ties resolve to the earliest
/// record.
///
/// # Errors
///
/// - [`QueryError::InvalidPopulationMargin`] if the margin is negative or NaN.
///   This is checked before anything else.
/// - [`QueryError::EmptyInput`] if `records` is empty.
/// - [`QueryError::InvalidTargetPopulation`] if an explicit target is not finite.
/// - [`QueryError::NoCountyWithinMargin`] if the closest record is further
///   than the margin from the target.
pub fn find_closest_by_population(
    records: &[CountyRecord],
    options: ClosestMatch,
) -> Result<&CountyRecord> {
    let margin = options.max_abs_distance;
    if margin.is_nan() || margin < 0.0 {
        return Err(QueryError::InvalidPopulationMargin { margin });
    }

    let (first, rest) = records.split_first().ok_or(QueryError::EmptyInput)?;

    let target = match options.target {
        Some(target) if !target.is_finite() => {
            return Err(QueryError::InvalidTargetPopulation { target });
        }
        Some(target) if target >= 0.0 => target,
        _ => average_population(records)?,
    };

    let closest = rest.iter().fold(first, |best, candidate| {
        if candidate.population().distance_to(target) < best.population().distance_to(target) {
            candidate
        } else {
            best
        }
    });

    let distance = closest.population().distance_to(target);
    tracing::debug!(
        target,
        county = closest.county(),
        distance,
        "closest county found"
    );

    if distance > margin.abs() {
        return Err(QueryError::NoCountyWithinMargin { target });
    }

    Ok(closest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use countypop_types::Population;

    fn record(name: &str, year: i32, population: f64) -> CountyRecord {
        CountyRecord::new(
            format!("05000US{name}"),
            format!("{name} County, SC"),
            year,
            Population::new(population).unwrap(),
            format!("{}-county-sc", name.to_lowercase()),
        )
    }

    #[test]
    fn test_filter_by_year_keeps_order() {
        let records = vec![
            record("A", 2019, 10.0),
            record("B", 2020, 20.0),
            record("C", 2019, 30.0),
            record("D", 2020, 40.0),
        ];

        let filtered = filter_by_year(&records, 2020).unwrap();
        let names: Vec<_> = filtered.iter().map(CountyRecord::county).collect();
        assert_eq!(names, ["B County, SC", "D County, SC"]);
    }

    #[test]
    fn test_filter_by_year_missing() {
        let records = vec![record("A", 2019, 10.0)];
        assert_eq!(
            filter_by_year(&records, 2005),
            Err(QueryError::NoRecordsForYear { year: 2005 })
        );
    }

    #[test]
    fn test_filter_by_year_empty_input() {
        assert_eq!(
            filter_by_year(&[], 2020),
            Err(QueryError::NoRecordsForYear { year: 2020 })
        );
    }

    #[test]
    fn test_average_population() {
        let records = vec![
            record("A", 2020, 100.0),
            record("B", 2020, 200.0),
            record("C", 2020, 600.0),
        ];
        assert_relative_eq!(average_population(&records).unwrap(), 300.0);
    }

    #[test]
    fn test_average_population_empty() {
        assert_eq!(average_population(&[]), Err(QueryError::EmptyInput));
    }

    #[test]
    fn test_closest_with_explicit_target() {
        let records = vec![
            record("A", 2020, 1000.0),
            record("B", 2020, 1500.0),
            record("C", 2020, 2000.0),
        ];
        let options = ClosestMatch::new().with_target(1480.0);
        let closest = find_closest_by_population(&records, options).unwrap();
        assert_eq!(closest.county(), "B County, SC");
    }

    #[test]
    fn test_closest_defaults_to_average() {
        let records = vec![
            record("A", 2020, 100.0),
            record("B", 2020, 290.0),
            record("C", 2020, 600.0),
        ];
        // average is 330
        let options = ClosestMatch::new().with_max_abs_distance(50.0);
        let closest = find_closest_by_population(&records, options).unwrap();
        assert_eq!(closest.county(), "B County, SC");
    }

    #[test]
    fn test_negative_target_means_average() {
        let records = vec![record("A", 2020, 100.0), record("B", 2020, 500.0)];
        let options = ClosestMatch::new().with_target(-1.0);
        assert_eq!(
            find_closest_by_population(&records, options),
            Err(QueryError::NoCountyWithinMargin { target: 300.0 })
        );
    }

    #[test]
    fn test_negative_margin_checked_first() {
        let options = ClosestMatch::new().with_max_abs_distance(-1.0);
        assert_eq!(
            find_closest_by_population(&[], options),
            Err(QueryError::InvalidPopulationMargin { margin: -1.0 })
        );
    }

    #[test]
    fn test_nan_margin_rejected() {
        let records = vec![record("A", 2020, 100.0)];
        let options = ClosestMatch::new().with_max_abs_distance(f64::NAN);
        assert!(matches!(
            find_closest_by_population(&records, options),
            Err(QueryError::InvalidPopulationMargin { .. })
        ));
    }

    #[test]
    fn test_non_finite_target_rejected() {
        let records = vec![record("A", 2020, 100.0)];
        let options = ClosestMatch::new().with_target(f64::INFINITY);
        assert_eq!(
            find_closest_by_population(&records, options),
            Err(QueryError::InvalidTargetPopulation {
                target: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_closest_empty_input() {
        assert_eq!(
            find_closest_by_population(&[], ClosestMatch::default()),
            Err(QueryError::EmptyInput)
        );
    }

    #[test]
    fn test_margin_is_inclusive() {
        let records = vec![record("A", 2020, 1100.0)];
        let options = ClosestMatch::new().with_target(1000.0);
        let closest = find_closest_by_population(&records, options).unwrap();
        assert_eq!(closest.county(), "A County, SC");
    }

    #[test]
    fn test_zero_margin_requires_exact_match() {
        let records = vec![record("A", 2020, 1000.0), record("B", 2020, 1001.0)];
        let exact = ClosestMatch::new()
            .with_target(1001.0)
            .with_max_abs_distance(0.0);
        assert_eq!(
            find_closest_by_population(&records, exact).unwrap().county(),
            "B County, SC"
        );

        let off = exact.with_target(1000.5);
        assert_eq!(
            find_closest_by_population(&records, off),
            Err(QueryError::NoCountyWithinMargin { target: 1000.5 })
        );
    }

    #[test]
    fn test_tie_keeps_earliest() {
        let records = vec![
            record("A", 2020, 900.0),
            record("B", 2020, 1100.0),
            record("C", 2020, 900.0),
        ];
        let options = ClosestMatch::new().with_target(1000.0);
        let closest = find_closest_by_population(&records, options).unwrap();
        assert_eq!(closest.county(), "A County, SC");
    }
}

//! Population counts.

use serde::{Deserialize, Serialize};

use crate::PopulationError;

/// A county population count.
///
/// The API serves populations either as JSON numbers or as numeric strings;
/// both deserialize into a finite, non-negative `f64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawPopulation", into = "f64")]
pub struct Population(f64);

impl Population {
    /// Creates a population, validating that it is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN, infinite or negative.
    pub fn new(value: f64) -> Result<Self, PopulationError> {
        if !value.is_finite() {
            return Err(PopulationError::NotFinite);
        }
        if value < 0.0 {
            return Err(PopulationError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Returns the population as a float.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns the absolute distance between this population and `target`.
    #[must_use]
    pub fn distance_to(self, target: f64) -> f64 {
        (target - self.0).abs()
    }
}

impl From<Population> for f64 {
    fn from(population: Population) -> Self {
        population.0
    }
}

impl std::str::FromStr for Population {
    type Err = PopulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| PopulationError::NotANumber(s.to_string()))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Wire shape of a population before coercion.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPopulation {
    Number(f64),
    Text(String),
}

impl TryFrom<RawPopulation> for Population {
    type Error = PopulationError;

    fn try_from(raw: RawPopulation) -> Result<Self, Self::Error> {
        match raw {
            RawPopulation::Number(value) => Self::new(value),
            RawPopulation::Text(text) => text.parse(),
        }
    }
}

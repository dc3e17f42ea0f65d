//! DataUSA endpoints.

/// Endpoint serving population by county for every available year.
pub const DEFAULT_ENDPOINT: &str =
    "https://datausa.io/api/data?drilldowns=County&measures=Population";

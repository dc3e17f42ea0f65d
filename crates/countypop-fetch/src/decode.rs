//! Payload decoding.

use countypop_types::CountyRecord;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while decoding a record payload.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The payload is not valid JSON, or a record is malformed.
    #[error("Invalid record payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is an object without a `data` array.
    #[error("Payload has no \"data\" key")]
    MissingData,

    /// The payload is neither an object nor an array.
    #[error("Unexpected payload shape: expected an object or an array")]
    UnexpectedShape,
}

/// Decodes county records from a JSON payload.
///
/// Accepts either the API envelope (`{"data": [...], ...}`) or a bare array
/// of records. Populations served as numeric strings are coerced.
///
/// # Errors
///
/// Returns an error if the payload is not JSON, has the wrong shape, or any
/// record fails to decode.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<CountyRecord>, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let rows = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("data").ok_or(DecodeError::MissingData)?,
        _ => return Err(DecodeError::UnexpectedShape),
    };
    Ok(serde_json::from_value(rows)?)
}

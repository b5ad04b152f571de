use axum::http::StatusCode;
use serde_json::Value;

use catalogd_core::RawRecord;

use crate::app::errors;

/// Parse a request body into a candidate record.
///
/// Bodies are read as raw bytes so that malformed JSON gets the same error
/// shape as every other failure instead of a framework default.
pub fn record_from_bytes(bytes: &[u8]) -> Result<RawRecord, axum::response::Response> {
    let value: Value = serde_json::from_slice(bytes).map_err(|err| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_body",
            format!("invalid JSON: {err}"),
        )
    })?;

    match value {
        Value::Object(record) => Ok(record),
        _ => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_body",
            "request body must be a JSON object",
        )),
    }
}

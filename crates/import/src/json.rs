//! JSON array import source.

use catalogd_core::RawRecord;
use serde_json::Value;

use crate::ImportError;

/// Parse an import body as a JSON array of product objects. The records are
/// passed through unchanged; validation happens per record in the registry.
pub fn records_from_json(bytes: &[u8]) -> Result<Vec<RawRecord>, ImportError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| ImportError::Processing(format!("invalid JSON: {err}")))?;

    let Value::Array(items) = value else {
        return Err(ImportError::Processing(
            "expected a JSON array of products".to_string(),
        ));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(record) => Ok(record),
            _ => Err(ImportError::Processing(
                "import array items must be objects".to_string(),
            )),
        })
        .collect()
}

//! Bulk import: normalizes uploaded sources into candidate records.
//!
//! Uploaded spreadsheets and JSON arrays are reduced to the same free-form
//! record shape the registry validates one by one. This crate only parses;
//! it never decides which records make it into the catalog.

pub mod json;
pub mod tabular;

use catalogd_core::RawRecord;
use thiserror::Error;

/// Import pipeline error.
///
/// Two tiers mirror the endpoint contract: `UnsupportedFormat` rejects a
/// file before any parsing, while `Processing` means a structurally broken
/// source aborted the whole batch. Records that parse but fail validation
/// are not errors here; the registry skips those one by one.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("import processing failed: {0}")]
    Processing(String),
}

/// File formats the import endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Xlsx,
    Xls,
    Json,
}

impl ImportFormat {
    /// Pick the format from the uploaded file name, matching the extension
    /// case-insensitively. Anything else is rejected before parsing.
    pub fn from_filename(name: &str) -> Result<Self, ImportError> {
        let lowered = name.to_lowercase();
        if lowered.ends_with(".xlsx") {
            Ok(Self::Xlsx)
        } else if lowered.ends_with(".xls") {
            Ok(Self::Xls)
        } else if lowered.ends_with(".json") {
            Ok(Self::Json)
        } else {
            Err(ImportError::UnsupportedFormat(name.to_string()))
        }
    }
}

/// Normalize an uploaded file into candidate records.
pub fn records_from_file(filename: &str, bytes: &[u8]) -> Result<Vec<RawRecord>, ImportError> {
    match ImportFormat::from_filename(filename)? {
        ImportFormat::Xlsx | ImportFormat::Xls => tabular::records_from_workbook(bytes),
        ImportFormat::Json => json::records_from_json(bytes),
    }
}

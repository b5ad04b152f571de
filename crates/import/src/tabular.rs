//! Spreadsheet import source.
//!
//! Reads the first worksheet, resolves the canonical columns from the header
//! row and turns every following row into a candidate record. Both legacy
//! export headers (`COD_BARRAS`, `DESCRICAO_PRODUTO`, `IMAGEM`) and the
//! canonical field names are recognized, in any casing.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use catalogd_core::RawRecord;
use serde_json::Value;

use crate::ImportError;

const DESCRIPTION_HEADERS: &[&str] = &["DESCRICAO_PRODUTO", "description"];
const BARCODE_HEADERS: &[&str] = &["COD_BARRAS", "barcode"];
const IMAGE_HEADERS: &[&str] = &["IMAGEM", "image"];

/// Normalize a workbook (`.xlsx` or `.xls`) into candidate records.
///
/// Canonical cells are coerced to strings; a missing image cell, or a
/// missing image column altogether, becomes `""`. Unrecognized columns ride
/// along under their own header with typed values; recognized header names
/// never pass through, resolved or not. Rows without description or barcode
/// cells produce records that fail validation later; they do not abort the
/// batch.
pub fn records_from_workbook(bytes: &[u8]) -> Result<Vec<RawRecord>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|err| ImportError::Processing(format!("failed to open workbook: {err}")))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let Some(first_sheet) = sheet_names.first() else {
        return Err(ImportError::Processing("workbook has no worksheet".to_string()));
    };

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|err| ImportError::Processing(format!("failed to read worksheet: {err}")))?;

    records_from_rows(range.rows())
}

fn records_from_rows<'a, I>(mut rows: I) -> Result<Vec<RawRecord>, ImportError>
where
    I: Iterator<Item = &'a [Data]>,
{
    let header_row = rows
        .next()
        .ok_or_else(|| ImportError::Processing("worksheet has no header row".to_string()))?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_string(cell).unwrap_or_default())
        .collect();

    let idx_description = header_index(&headers, DESCRIPTION_HEADERS);
    let idx_barcode = header_index(&headers, BARCODE_HEADERS);
    let idx_image = header_index(&headers, IMAGE_HEADERS);

    let mut records = Vec::new();
    for row in rows {
        let mut record = RawRecord::new();

        if let Some(description) = idx_description.and_then(|i| row.get(i)).and_then(cell_string) {
            record.insert("description".to_string(), Value::String(description));
        }
        if let Some(barcode) = idx_barcode.and_then(|i| row.get(i)).and_then(cell_string) {
            record.insert("barcode".to_string(), Value::String(barcode));
        }

        // The image column is optional all the way down: no column and no
        // cell both mean "no picture".
        let image = idx_image
            .and_then(|i| row.get(i))
            .and_then(cell_string)
            .unwrap_or_default();
        record.insert("image".to_string(), Value::String(image));

        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() || is_canonical_header(header) {
                continue;
            }
            let value = row.get(i).map(cell_value).unwrap_or(Value::Null);
            record.insert(header.clone(), value);
        }

        records.push(record);
    }

    Ok(records)
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

fn header_index(headers: &[String], candidates: &[&str]) -> Option<usize> {
    for cand in candidates {
        let cand_norm = normalize_header(cand);
        if let Some(idx) = headers
            .iter()
            .position(|h| normalize_header(h) == cand_norm)
        {
            return Some(idx);
        }
    }
    None
}

fn is_canonical_header(header: &str) -> bool {
    let norm = normalize_header(header);
    DESCRIPTION_HEADERS
        .iter()
        .chain(BARCODE_HEADERS)
        .chain(IMAGE_HEADERS)
        .any(|cand| normalize_header(cand) == norm)
}

fn cell_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.trim().to_string()),
        Data::Float(v) => Some(format!("{v}")),
        Data::Int(v) => Some(format!("{v}")),
        Data::Bool(v) => Some(if *v { "1".to_string() } else { "0".to_string() }),
        other => Some(format!("{other:?}")),
    }
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.trim().to_string()),
        Data::Float(v) => serde_json::Number::from_f64(*v)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::Int(v) => Value::Number((*v).into()),
        Data::Bool(v) => Value::Bool(*v),
        other => Value::String(format!("{other:?}")),
    }
}

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Candidate shape shared by every input source (HTTP bodies, spreadsheet
/// rows, JSON imports): a free-form JSON object.
pub type RawRecord = Map<String, Value>;

/// Loose presence rule used by candidate validation: `null`, `false`,
/// numeric zero, `""`, `[]` and `{}` all count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Barcode: the catalog's unique key, always handled as a string.
///
/// Sources frequently carry barcodes as numbers (spreadsheet cells, JSON
/// integers), so construction normalizes numeric values to their decimal
/// rendering before they enter the domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Barcode(String);

impl Barcode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Normalize a JSON scalar into a barcode. Strings pass through
    /// unchanged; numbers render in decimal (`111` and `111.0` both become
    /// `"111"`, `111.5` stays `"111.5"`). Anything else is not a barcode.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self(i.to_string()))
                } else if let Some(u) = n.as_u64() {
                    Some(Self(u.to_string()))
                } else {
                    n.as_f64().map(|v| Self(v.to_string()))
                }
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<'de> Deserialize<'de> for Barcode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BarcodeVisitor;

        impl Visitor<'_> for BarcodeVisitor {
            type Value = Barcode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a barcode string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Barcode, E> {
                Ok(Barcode(v.to_owned()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Barcode, E> {
                Ok(Barcode(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Barcode, E> {
                Ok(Barcode(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Barcode, E> {
                Ok(Barcode(v.to_string()))
            }
        }

        deserializer.deserialize_any(BarcodeVisitor)
    }
}

/// A catalog product.
///
/// `barcode` and `description` are mandatory; `image` defaults to empty.
/// Every other field a source supplies rides along in `extra`, serialized
/// inline, so the catalog stays schema-open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub barcode: Barcode,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl Product {
    /// Validate a free-form record into a product.
    ///
    /// `description` must be a non-empty string and `barcode` a non-empty
    /// string or number; `image` may be absent or `null`, both of which
    /// normalize to `""`. The canonical keys are lifted out of the record so
    /// the remaining fields pass through untouched.
    pub fn from_record(mut record: RawRecord) -> DomainResult<Self> {
        let description = match record.remove("description") {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(value) if is_truthy(&value) => {
                return Err(DomainError::validation("description must be a string"));
            }
            _ => return Err(DomainError::validation("description is required")),
        };

        let barcode = match record.remove("barcode") {
            Some(value) if is_truthy(&value) => Barcode::from_value(&value)
                .ok_or_else(|| DomainError::validation("barcode must be a string or number"))?,
            _ => return Err(DomainError::validation("barcode is required")),
        };

        let image = match record.remove("image") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(_) => return Err(DomainError::validation("image must be a string")),
        };

        Ok(Self {
            barcode,
            description,
            image,
            extra: record,
        })
    }
}

/// A partial update as accepted by the catalog.
///
/// The body is validated like a full candidate (it must carry a truthy
/// `description` and `barcode`), but only `description` and `image` are
/// applied. The barcode value itself is discarded, since the key a product
/// is stored under never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPatch {
    pub description: String,
    /// `None` keeps the stored image; an explicit `null` resets it to `""`.
    pub image: Option<String>,
}

impl ProductPatch {
    pub fn from_record(mut record: RawRecord) -> DomainResult<Self> {
        let description = match record.remove("description") {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(value) if is_truthy(&value) => {
                return Err(DomainError::validation("description must be a string"));
            }
            _ => return Err(DomainError::validation("description is required")),
        };

        match record.remove("barcode") {
            Some(value) if is_truthy(&value) => {
                if Barcode::from_value(&value).is_none() {
                    return Err(DomainError::validation("barcode must be a string or number"));
                }
            }
            _ => return Err(DomainError::validation("barcode is required")),
        }

        let image = match record.remove("image") {
            None => None,
            Some(Value::Null) => Some(String::new()),
            Some(Value::String(s)) => Some(s),
            Some(_) => return Err(DomainError::validation("image must be a string")),
        };

        Ok(Self { description, image })
    }

    pub fn apply_to(&self, product: &mut Product) {
        product.description = self.description.clone();
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
    }
}

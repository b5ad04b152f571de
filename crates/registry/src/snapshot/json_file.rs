use std::fs;
use std::path::{Path, PathBuf};

use catalogd_core::Product;

use super::{SnapshotError, SnapshotStore};

/// JSON file snapshot store.
///
/// The snapshot is a pretty-printed JSON array of products, rewritten in
/// full on every save. A torn write leaves a file that no longer parses,
/// which `load` treats the same as no snapshot at all.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self) -> Vec<Product> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!("no snapshot at {}, starting empty: {err}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(products) => products,
            Err(err) => {
                tracing::warn!(
                    "snapshot at {} is unreadable, starting empty: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn save(&self, products: &[Product]) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(products)?;
        fs::write(&self.path, json).map_err(|source| SnapshotError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

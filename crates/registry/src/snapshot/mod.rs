//! Whole-collection snapshot boundary.
//!
//! The registry mirrors its in-memory collection to a snapshot after every
//! mutation. This module defines that boundary without making storage
//! assumptions beyond "the whole collection is written at once".

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemorySnapshotStore;
pub use json_file::JsonFileSnapshotStore;

use std::sync::Arc;

use catalogd_core::Product;
use thiserror::Error;

/// Snapshot operation error.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("snapshot write to {path} failed: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Snapshot store for the product collection.
///
/// `load` never fails past this boundary: a missing, unreadable or corrupt
/// snapshot degrades to an empty catalog so the service can always start.
/// `save` overwrites the snapshot wholesale; there is no append or diff.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Vec<Product>;

    fn save(&self, products: &[Product]) -> Result<(), SnapshotError>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn load(&self) -> Vec<Product> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> Result<(), SnapshotError> {
        (**self).save(products)
    }
}

//! The product registry: the catalog's single writer.

use std::sync::{Mutex, MutexGuard};

use catalogd_core::{DomainError, Product, ProductPatch, RawRecord};
use thiserror::Error;

use crate::snapshot::{SnapshotError, SnapshotStore};

/// Result type used across the registry layer.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry operation error.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("snapshot persistence failed: {0}")]
    Persistence(#[from] SnapshotError),

    #[error("registry lock poisoned")]
    Poisoned,
}

/// In-memory product collection mirrored to a snapshot store.
///
/// One mutex guards the collection, and every mutating operation holds it
/// across both the collection change and the snapshot write, so concurrent
/// requests serialize and the snapshot always reflects a consistent state.
/// A failed snapshot write is reported to the caller but the in-memory
/// change stands; the next successful mutation converges the mirror again.
pub struct ProductRegistry<S> {
    products: Mutex<Vec<Product>>,
    store: S,
}

impl<S: SnapshotStore> ProductRegistry<S> {
    /// Open the registry over a snapshot store, loading whatever state the
    /// store has. An absent or unreadable snapshot means an empty catalog.
    pub fn open(store: S) -> Self {
        let products = store.load();
        tracing::info!("registry opened with {} product(s)", products.len());
        Self {
            products: Mutex::new(products),
            store,
        }
    }

    fn guard(&self) -> RegistryResult<MutexGuard<'_, Vec<Product>>> {
        self.products.lock().map_err(|_| RegistryError::Poisoned)
    }

    fn persist(&self, products: &[Product]) -> RegistryResult<()> {
        self.store.save(products).map_err(|err| {
            tracing::error!("snapshot write failed, memory and disk have diverged: {err}");
            RegistryError::Persistence(err)
        })
    }

    /// Every product, in insertion order.
    pub fn list(&self) -> RegistryResult<Vec<Product>> {
        Ok(self.guard()?.clone())
    }

    /// Look a product up by its normalized barcode.
    pub fn get(&self, barcode: &str) -> RegistryResult<Option<Product>> {
        Ok(self
            .guard()?
            .iter()
            .find(|p| p.barcode.as_str() == barcode)
            .cloned())
    }

    /// Validate and insert a new product. Fails on invalid candidates and on
    /// barcodes that are already registered.
    pub fn add(&self, record: RawRecord) -> RegistryResult<Product> {
        let product = Product::from_record(record)?;

        let mut products = self.guard()?;
        if products.iter().any(|p| p.barcode == product.barcode) {
            return Err(DomainError::conflict(format!(
                "barcode {} is already registered",
                product.barcode
            ))
            .into());
        }
        products.push(product.clone());
        self.persist(&products)?;
        Ok(product)
    }

    /// Apply a partial update to the product stored under `barcode`.
    ///
    /// The patch must validate like a full candidate, but only `description`
    /// and `image` are merged; the stored barcode never changes.
    pub fn update(&self, barcode: &str, patch: RawRecord) -> RegistryResult<Product> {
        let mut products = self.guard()?;
        let product = products
            .iter_mut()
            .find(|p| p.barcode.as_str() == barcode)
            .ok_or(DomainError::NotFound)?;

        let patch = ProductPatch::from_record(patch)?;
        patch.apply_to(product);
        let updated = product.clone();
        self.persist(&products)?;
        Ok(updated)
    }

    /// Remove the product stored under `barcode`. Removing an absent barcode
    /// is a no-op that still reports success.
    pub fn remove(&self, barcode: &str) -> RegistryResult<()> {
        let mut products = self.guard()?;
        products.retain(|p| p.barcode.as_str() != barcode);
        self.persist(&products)
    }

    /// Empty the catalog.
    pub fn clear(&self) -> RegistryResult<()> {
        let mut products = self.guard()?;
        products.clear();
        self.persist(&products)
    }

    /// Merge a batch of candidate records into the catalog.
    ///
    /// Records that fail validation, and records whose barcode is already
    /// taken (by the existing collection or by an earlier record in the same
    /// batch), are skipped. The snapshot is written once, after the whole
    /// batch. Returns how many records were actually inserted.
    pub fn bulk_import(&self, records: Vec<RawRecord>) -> RegistryResult<usize> {
        let mut products = self.guard()?;
        let mut imported = 0;

        for record in records {
            let product = match Product::from_record(record) {
                Ok(product) => product,
                Err(err) => {
                    tracing::debug!("skipping invalid import record: {err}");
                    continue;
                }
            };
            if products.iter().any(|p| p.barcode == product.barcode) {
                tracing::debug!("skipping import record, barcode {} taken", product.barcode);
                continue;
            }
            products.push(product);
            imported += 1;
        }

        self.persist(&products)?;
        Ok(imported)
    }
}

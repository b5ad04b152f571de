use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use catalogd_core::Product;

use super::{SnapshotError, SnapshotStore};

/// In-memory snapshot store.
///
/// Intended for tests/dev. Remembers the last saved collection and counts
/// saves so the one-write-per-mutation policy can be asserted.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    saved: RwLock<Vec<Product>>,
    saves: AtomicUsize,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the store, as if a previous process had saved `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            saved: RwLock::new(products),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn saved_products(&self) -> Vec<Product> {
        self.saved.read().map(|guard| guard.clone()).unwrap_or_default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Vec<Product> {
        self.saved.read().map(|guard| guard.clone()).unwrap_or_default()
    }

    fn save(&self, products: &[Product]) -> Result<(), SnapshotError> {
        let mut saved = self
            .saved
            .write()
            .map_err(|_| SnapshotError::Unavailable("lock poisoned".to_string()))?;
        *saved = products.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

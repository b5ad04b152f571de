use std::path::PathBuf;

use catalogd_registry::{JsonFileSnapshotStore, ProductRegistry};

/// Shared state handed to every handler.
///
/// The registry is the catalog's single writer; handlers call it directly,
/// since every operation is a short in-memory scan plus at most one
/// snapshot write.
pub struct AppServices {
    pub registry: ProductRegistry<JsonFileSnapshotStore>,
}

pub fn build_services(snapshot_path: impl Into<PathBuf>) -> AppServices {
    let store = JsonFileSnapshotStore::new(snapshot_path);

    AppServices {
        registry: ProductRegistry::open(store),
    }
}

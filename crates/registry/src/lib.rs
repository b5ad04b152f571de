//! Product registry: the catalog's single writer and its snapshot mirror.

pub mod registry;
pub mod snapshot;

pub use registry::{ProductRegistry, RegistryError, RegistryResult};
pub use snapshot::{InMemorySnapshotStore, JsonFileSnapshotStore, SnapshotError, SnapshotStore};

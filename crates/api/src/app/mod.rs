//! HTTP application wiring (Axum router + shared state).
//!
//! This folder is structured like:
//! - `services.rs`: registry wiring over the JSON snapshot file
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent error responses

use std::path::PathBuf;
use std::sync::Arc;

use axum::{Extension, Router};

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(snapshot_path: impl Into<PathBuf>) -> Router {
    let services = Arc::new(services::build_services(snapshot_path));

    routes::router().layer(Extension(services))
}

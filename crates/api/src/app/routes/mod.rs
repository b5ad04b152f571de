use axum::{routing::get, Router};

pub mod common;
pub mod import;
pub mod products;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .nest("/api", products::router().merge(import::router()))
}

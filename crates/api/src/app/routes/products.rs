use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::errors;
use crate::app::routes::common;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(
            "/produtos",
            get(list_products)
                .post(create_product)
                .delete(delete_all_products),
        )
        .route(
            "/produto/:barcode",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.registry.list() {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(err) => errors::registry_error_to_response(err),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(barcode): Path<String>,
) -> axum::response::Response {
    match services.registry.get(&barcode) {
        Ok(Some(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        Err(err) => errors::registry_error_to_response(err),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let record = match common::record_from_bytes(&body) {
        Ok(record) => record,
        Err(response) => return response,
    };

    match services.registry.add(record) {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(err) => errors::registry_error_to_response(err),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(barcode): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let patch = match common::record_from_bytes(&body) {
        Ok(record) => record,
        Err(response) => return response,
    };

    match services.registry.update(&barcode, patch) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(err) => errors::registry_error_to_response(err),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(barcode): Path<String>,
) -> axum::response::Response {
    match services.registry.remove(&barcode) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({"message": "product removed"})),
        )
            .into_response(),
        Err(err) => errors::registry_error_to_response(err),
    }
}

pub async fn delete_all_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.registry.clear() {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({"message": "all products removed"})),
        )
            .into_response(),
        Err(err) => errors::registry_error_to_response(err),
    }
}

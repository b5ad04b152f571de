use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalogd_core::DomainError;
use catalogd_import::ImportError;
use catalogd_registry::RegistryError;

pub fn registry_error_to_response(err: RegistryError) -> axum::response::Response {
    match err {
        RegistryError::Domain(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        RegistryError::Domain(DomainError::Conflict(msg)) => {
            json_error(StatusCode::CONFLICT, "conflict", msg)
        }
        RegistryError::Domain(DomainError::NotFound) => {
            json_error(StatusCode::NOT_FOUND, "not_found", "product not found")
        }
        RegistryError::Persistence(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "persistence_error",
            e.to_string(),
        ),
        RegistryError::Poisoned => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "registry lock poisoned",
        ),
    }
}

pub fn import_error_to_response(err: ImportError) -> axum::response::Response {
    match err {
        ImportError::UnsupportedFormat(name) => json_error(
            StatusCode::BAD_REQUEST,
            "unsupported_format",
            format!("unsupported file format: {name}"),
        ),
        ImportError::Processing(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "processing_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

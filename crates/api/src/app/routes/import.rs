use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Extension, FromRequest, Multipart, Request},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};

use catalogd_core::RawRecord;
use catalogd_import::records_from_file;

use crate::app::errors;
use crate::app::services::AppServices;

/// Upload size cap for import bodies.
pub const BODY_LIMIT: usize = 32 * 1024 * 1024;

pub fn router() -> Router {
    Router::new().route(
        "/importar_produtos",
        post(import_products).layer(DefaultBodyLimit::max(BODY_LIMIT)),
    )
}

/// Accepts either a multipart upload (field `file`, xlsx/xls/json) or a raw
/// JSON array body, normalizes it to candidate records, and merges them into
/// the catalog.
pub async fn import_products(
    Extension(services): Extension<Arc<AppServices>>,
    req: Request,
) -> axum::response::Response {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let records = if content_type.starts_with("multipart/form-data") {
        match records_from_multipart(req).await {
            Ok(records) => records,
            Err(response) => return response,
        }
    } else if content_type.starts_with("application/json") {
        let bytes = match axum::body::to_bytes(req.into_body(), BODY_LIMIT).await {
            Ok(bytes) => bytes,
            Err(err) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", err.to_string());
            }
        };
        match catalogd_import::json::records_from_json(&bytes) {
            Ok(records) => records,
            Err(err) => return errors::import_error_to_response(err),
        }
    } else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "no_input",
            "no file or JSON payload provided",
        );
    };

    match services.registry.bulk_import(records) {
        Ok(imported) => (
            StatusCode::CREATED,
            Json(serde_json::json!({"imported": imported})),
        )
            .into_response(),
        Err(err) => errors::registry_error_to_response(err),
    }
}

/// Pull the `file` field out of a multipart upload and parse it by its file
/// name extension.
async fn records_from_multipart(req: Request) -> Result<Vec<RawRecord>, axum::response::Response> {
    let mut multipart = Multipart::from_request(req, &()).await.map_err(|err| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", err.to_string())
    })?;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                return Err(errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_body",
                    err.to_string(),
                ));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|err| {
            errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", err.to_string())
        })?;

        return records_from_file(&filename, &bytes).map_err(errors::import_error_to_response);
    }

    Err(errors::json_error(
        StatusCode::BAD_REQUEST,
        "no_input",
        "no file or JSON payload provided",
    ))
}

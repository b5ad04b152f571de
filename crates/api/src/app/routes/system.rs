use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "product catalog API is running, see /api/produtos",
    }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};

/// Root path - redirect to the movie search form
pub async fn root() -> Redirect {
    Redirect::to("/search")
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

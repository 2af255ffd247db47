use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::clients::GatewayError;
use crate::core::{RegistryError, SessionError};

/// Request-handling errors, mapped to HTTP responses at the boundary
///
/// All gateway failures are converted here; none propagate past the handler
/// layer. There are no retries anywhere.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required query or form parameter was absent
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// An upstream search provider failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Unknown game identifier
    #[error("game not found")]
    GameNotFound,

    /// Selection workflow violation
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Registry invariant violation
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Anything that should never happen under correct operation
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Gateway(GatewayError::EmptyQuery) => StatusCode::BAD_REQUEST,
            ApiError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::GameNotFound => StatusCode::NOT_FOUND,
            ApiError::Session(SessionError::SessionFull) => StatusCode::CONFLICT,
            ApiError::Session(_) => StatusCode::BAD_REQUEST,
            ApiError::Registry(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, self.to_string()).into_response()
    }
}

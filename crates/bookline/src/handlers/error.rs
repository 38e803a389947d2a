use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use bookline_core::storage::{repository_error_to_status_code, RepositoryError};

/// Wrapper turning repository errors into JSON error responses.
///
/// The status code comes from the pure mapping in `bookline_core`; the body
/// carries the error message under an `error` key.
pub struct AppError(pub RepositoryError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = repository_error_to_status_code(&self.0);
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        tracing::error!(status = %status, error = %self.0, "Repository error");

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self(err)
    }
}

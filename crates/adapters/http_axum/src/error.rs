//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use turista_domain::error::TuristaError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`TuristaError`] to an HTTP response with appropriate status code.
pub struct ApiError(TuristaError);

impl From<TuristaError> for ApiError {
    fn from(err: TuristaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TuristaError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            TuristaError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            TuristaError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            TuristaError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

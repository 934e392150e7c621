//! API error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use wiq_types::Error;

/// Error body shape shared by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

/// Wrapper turning domain errors into HTTP responses.
///
/// Validation and business-rule failures map to 400; everything else is an
/// internal fault and maps to 500. The body shape is the same either way.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_user_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self.0, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = Json(ErrorBody {
            status: "error".to_string(),
            message: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

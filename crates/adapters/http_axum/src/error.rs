//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use gestion_salles_domain::error::GestionSallesError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps request and [`GestionSallesError`] failures to an HTTP response.
pub enum ApiError {
    /// Failure reported by the application layer.
    Service(GestionSallesError),
    /// The request itself is malformed.
    BadRequest(&'static str),
}

impl From<GestionSallesError> for ApiError {
    fn from(err: GestionSallesError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(reason) => (StatusCode::BAD_REQUEST, (*reason).to_string()),
            Self::Service(GestionSallesError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Service(GestionSallesError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Service(err @ GestionSallesError::Storage(_)) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

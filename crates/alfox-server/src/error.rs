//! HTTP error types for the Alfox server.
//!
//! Maps domain errors from `alfox-core` into HTTP responses. Every error
//! produces a JSON body `{"error": "..."}`; the landing page shows that
//! string to the visitor as-is.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use alfox_core::error::LeadError;

/// Message returned for any unexpected fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Client sent invalid input.
    BadRequest(String),
    /// Internal server error. The detail is logged, never returned.
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "error processing request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        (status, axum::Json(ErrorBody { error })).into_response()
    }
}

impl From<LeadError> for AppError {
    fn from(err: LeadError) -> Self {
        match err {
            LeadError::MissingFields | LeadError::InvalidEmail { .. } => {
                Self::BadRequest(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON of the wrong shape (e.g. `services` is a string).
            JsonRejection::JsonDataError(_) => Self::from(LeadError::MissingFields),
            JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                Self::BadRequest("Invalid JSON body".to_owned())
            }
            other if other.status().is_client_error() => {
                Self::BadRequest("Invalid JSON body".to_owned())
            }
            other => Self::Internal(other.body_text()),
        }
    }
}

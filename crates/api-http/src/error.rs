//! HTTP Error Mapping
//!
//! Maps application errors to status codes and `{"error": ...}` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cpu_stress_core::application::constants::{CPU_USAGE_ERROR_MESSAGE, LAUNCH_ERROR_MESSAGE};
use cpu_stress_core::error::AppError;
use thiserror::Error;

use crate::types::ErrorResponse;

/// Error returned by handlers
///
/// `message` is what the client sees; `source` stays server-side.
#[derive(Error, Debug)]
#[error("{message}: {source}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    #[source]
    pub source: AppError,
}

impl ApiError {
    /// Any failure while sampling CPU usage
    pub fn cpu_usage(source: AppError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: CPU_USAGE_ERROR_MESSAGE.to_string(),
            source,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let message = match &err {
            AppError::Launch(_) => LAUNCH_ERROR_MESSAGE.to_string(),
            AppError::Sampling(_) | AppError::Domain(_) => CPU_USAGE_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        };

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
            source: err,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

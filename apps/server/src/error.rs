//! Error handling for the render server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::settings::SettingsError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Settings(_) => (StatusCode::INTERNAL_SERVER_ERROR, "settings_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status() {
        let error = ApiError::BadRequest("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_settings_error_status() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ApiError::from(SettingsError::from(io));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal("unexpected error".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display_bad_request() {
        let error = ApiError::BadRequest("empty document".to_string());
        assert_eq!(error.to_string(), "Bad request: empty document");
    }

    #[test]
    fn test_error_display_settings() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ApiError::from(SettingsError::from(io));
        assert_eq!(error.to_string(), "Settings error: settings io error: denied");
    }
}

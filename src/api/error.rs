use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{KnownRequestError, Locale};
use crate::metrics::UNHANDLED_ERRORS_TOTAL;

/// Errors returned by request handlers.
///
/// Database errors are not rendered here: the response carries the
/// [`KnownRequestError`] as an extension and the translation layer
/// (see [`super::translate`]) replaces the body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] KnownRequestError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(err) => {
                let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
                response.extensions_mut().insert(err);
                response
            }
            AppError::Internal(err) => {
                error!("Unhandled error: {:#}", err);
                UNHANDLED_ERRORS_TOTAL.inc();
                ApiError::internal_error("Internal server error").into_response()
            }
        }
    }
}

/// Error codes for the service's own endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ApiErrorCode {
    /// Input validation failed
    #[serde(rename = "VALIDATION_ERROR")]
    ValidationError,

    /// Requested error code is not in the table
    #[serde(rename = "CODE_NOT_FOUND")]
    CodeNotFound,

    /// Internal server error
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationError => write!(f, "VALIDATION_ERROR"),
            Self::CodeNotFound => write!(f, "CODE_NOT_FOUND"),
            Self::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

impl ApiErrorCode {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError => StatusCode::BAD_REQUEST,
            Self::CodeNotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured error response for the service's own endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Always false for errors
    pub success: bool,
    /// Error details
    pub error: ApiErrorDetail,
}

/// Error details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorDetail {
    /// Error code for programmatic handling
    pub code: ApiErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for tracing
    pub request_id: String,
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ApiErrorDetail {
                code,
                message: message.into(),
                request_id: Uuid::new_v4().to_string(),
            },
        }
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::ValidationError, message)
    }

    pub fn code_not_found(code: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::CodeNotFound,
            format!("Unknown error code: {}", code.into()),
        )
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::InternalError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.error.code.status_code(), Json(self)).into_response()
    }
}

/// Parse an optional locale override, defaulting to `fallback`
pub fn resolve_locale(requested: Option<&str>, fallback: Locale) -> Result<Locale, ApiError> {
    match requested {
        Some(raw) => raw
            .parse()
            .map_err(|e: crate::errors::LocaleError| ApiError::validation_error(e.to_string())),
        None => Ok(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let err = ApiError::code_not_found("P1234");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("CODE_NOT_FOUND"));
        assert!(json.contains("P1234"));
        assert!(json.contains("request_id"));
    }

    #[test]
    fn test_api_error_statuses() {
        assert_eq!(
            ApiError::validation_error("bad").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::code_not_found("P1").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::internal_error("boom").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_rides_in_extensions() {
        let err = KnownRequestError::new("P2002", "dup").with_meta("target", "email");
        let response = AppError::from(err.clone()).into_response();

        assert_eq!(response.extensions().get::<KnownRequestError>(), Some(&err));
    }

    #[test]
    fn test_internal_error_is_generic() {
        let response = AppError::from(anyhow::anyhow!("connection reset")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<KnownRequestError>().is_none());
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale(None, Locale::PtBr).unwrap(), Locale::PtBr);
        assert_eq!(resolve_locale(Some("en"), Locale::PtBr).unwrap(), Locale::En);
        let err = resolve_locale(Some("klingon"), Locale::En).unwrap_err();
        assert_eq!(err.error.code, ApiErrorCode::ValidationError);
    }
}

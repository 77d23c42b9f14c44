use axum::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use super::codes::KnownErrorCode;
use super::exception::KnownRequestError;
use super::locale::Locale;
use super::messages;
use super::response::ErrorResponse;
use crate::metrics::KNOWN_REQUEST_ERRORS_TOTAL;

/// Status and message source resolved for one error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDescriptor {
    /// `None` for the generic fallback
    pub code: Option<KnownErrorCode>,
    pub status: StatusCode,
}

impl ErrorDescriptor {
    pub const FALLBACK: Self = Self {
        code: None,
        status: StatusCode::INTERNAL_SERVER_ERROR,
    };

    /// Metric label: the table code, or "unknown" for the fallback
    pub fn metric_label(&self) -> &'static str {
        self.code.map(|code| code.as_str()).unwrap_or("unknown")
    }

    pub fn render(&self, locale: Locale, err: &KnownRequestError) -> String {
        match self.code {
            Some(code) => messages::render(code, locale, err),
            None => messages::default_message(locale).to_string(),
        }
    }
}

/// One row of the published code table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CatalogEntry {
    /// Engine error code
    pub code: KnownErrorCode,
    /// HTTP status returned for the code
    pub status: u16,
    /// Message rendered with no meta fields
    pub message: String,
}

/// Translates known request errors into HTTP error bodies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorResponder {
    locale: Locale,
}

impl ErrorResponder {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up the descriptor for a raw code; absent or unknown codes get the fallback
    pub fn describe(code: Option<&str>) -> ErrorDescriptor {
        match code.and_then(KnownErrorCode::parse) {
            Some(code) => ErrorDescriptor {
                code: Some(code),
                status: code.status_code(),
            },
            None => ErrorDescriptor::FALLBACK,
        }
    }

    /// Build the response body for `exception` raised while serving `request_path`
    pub fn handle(&self, exception: KnownRequestError, request_path: &str) -> ErrorResponse {
        let descriptor = Self::describe(exception.code.as_deref());
        let message = descriptor.render(self.locale, &exception);
        let status_code = descriptor.status.as_u16();
        let raw_code = exception.code.as_deref().unwrap_or("none");

        // Label by table entry only; raw codes come from callers and are unbounded
        KNOWN_REQUEST_ERRORS_TOTAL
            .with_label_values(&[descriptor.metric_label(), &status_code.to_string()])
            .inc();

        if descriptor.status.is_server_error() {
            error!(
                code = %raw_code,
                status = %status_code,
                path = %request_path,
                engine_message = %exception.message,
                "Database request failed"
            );
        } else {
            warn!(
                code = %raw_code,
                status = %status_code,
                path = %request_path,
                "Database request rejected"
            );
        }

        ErrorResponse {
            status_code,
            message,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: request_path.to_string(),
            data: exception,
        }
    }

    /// Every known code with its status and meta-less message
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        KnownErrorCode::ALL
            .iter()
            .map(|&code| self.catalog_entry(code))
            .collect()
    }

    pub fn catalog_entry(&self, code: KnownErrorCode) -> CatalogEntry {
        CatalogEntry {
            code,
            status: code.status_code().as_u16(),
            message: messages::render(code, self.locale, &KnownRequestError::default()),
        }
    }
}

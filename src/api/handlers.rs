use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;
use utoipa::ToSchema;

use super::error::{resolve_locale, ApiError, AppError};
use crate::errors::{
    CatalogEntry, ErrorResponder, ErrorResponse, KnownErrorCode, KnownRequestError,
};

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub responder: ErrorResponder,
    pub instance_id: String,
}

/// Locale override for catalog lookups
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct LocaleParams {
    /// Message language ("en" or "pt-BR"); defaults to the configured locale
    pub locale: Option<String>,
}

/// Code catalog response
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Locale the messages were rendered in
    pub locale: String,
    /// One entry per known code
    pub data: Vec<CatalogEntry>,
}

/// Single catalog entry response
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogEntryResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Locale the message was rendered in
    pub locale: String,
    /// The entry
    pub data: CatalogEntry,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "prisma-error-responder",
        "version": env!("CARGO_PKG_VERSION"),
        "locale": state.responder.locale().as_str(),
        "instance_id": state.instance_id,
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}

/// List every known error code with its status and message
#[utoipa::path(
    get,
    path = "/errors/codes",
    tag = "errors",
    params(LocaleParams),
    responses(
        (status = 200, description = "Code catalog", body = CatalogResponse),
        (status = 400, description = "Unsupported locale", body = ApiError)
    )
)]
pub async fn list_codes(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> impl IntoResponse {
    let locale = match resolve_locale(params.locale.as_deref(), state.responder.locale()) {
        Ok(locale) => locale,
        Err(e) => return e.into_response(),
    };

    let data = ErrorResponder::new(locale).catalog();
    info!("Catalog request: locale={}, entries={}", locale, data.len());

    (
        StatusCode::OK,
        Json(CatalogResponse {
            success: true,
            locale: locale.to_string(),
            data,
        }),
    )
        .into_response()
}

/// Look up a single error code
#[utoipa::path(
    get,
    path = "/errors/codes/{code}",
    tag = "errors",
    params(
        ("code" = String, Path, description = "Engine error code, e.g. P2002"),
        LocaleParams
    ),
    responses(
        (status = 200, description = "Code found", body = CatalogEntryResponse),
        (status = 400, description = "Unsupported locale", body = ApiError),
        (status = 404, description = "Code not in the table", body = ApiError)
    )
)]
pub async fn get_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<LocaleParams>,
) -> impl IntoResponse {
    let locale = match resolve_locale(params.locale.as_deref(), state.responder.locale()) {
        Ok(locale) => locale,
        Err(e) => return e.into_response(),
    };

    match KnownErrorCode::parse(&code) {
        Some(known) => (
            StatusCode::OK,
            Json(CatalogEntryResponse {
                success: true,
                locale: locale.to_string(),
                data: ErrorResponder::new(locale).catalog_entry(known),
            }),
        )
            .into_response(),
        None => {
            info!("Code not found: {}", code);
            ApiError::code_not_found(code).into_response()
        }
    }
}

/// Preview the response a known request error translates to
#[utoipa::path(
    post,
    path = "/errors/render",
    tag = "errors",
    request_body = KnownRequestError,
    responses(
        (status = 400, description = "Translated client error", body = ErrorResponse),
        (status = 404, description = "Translated not-found error", body = ErrorResponse),
        (status = 409, description = "Translated conflict", body = ErrorResponse),
        (status = 500, description = "Translated server error or unknown code", body = ErrorResponse)
    )
)]
pub async fn render_error(Json(exception): Json<KnownRequestError>) -> AppError {
    info!("Render request: code={:?}", exception.code);

    // Raised like any handler failure so the translation layer answers it
    AppError::Database(exception)
}

use utoipa::OpenApi;

use crate::api::error::{ApiError, ApiErrorCode, ApiErrorDetail};
use crate::api::handlers::{CatalogEntryResponse, CatalogResponse, LocaleParams};
use crate::errors::{CatalogEntry, ErrorResponse, KnownErrorCode, KnownRequestError, Locale};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Prisma Error Responder",
        version = "0.1.0",
        description = "Translates known database request errors (P2xxx codes) into consistent JSON error responses, and publishes the code-to-status table.",
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::list_codes,
        crate::api::handlers::get_code,
        crate::api::handlers::render_error,
    ),
    components(
        schemas(
            KnownErrorCode,
            KnownRequestError,
            Locale,
            ErrorResponse,
            CatalogEntry,
            CatalogResponse,
            CatalogEntryResponse,
            LocaleParams,
            ApiError,
            ApiErrorDetail,
            ApiErrorCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "errors", description = "Error code catalog and translation preview"),
    )
)]
pub struct ApiDoc;

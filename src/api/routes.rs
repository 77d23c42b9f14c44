use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{get_code, health, list_codes, render_error, AppState};
use super::middleware::logging_middleware;
use super::openapi::ApiDoc;
use super::translate::with_error_translation;
use crate::metrics;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let responder = state.responder;

    let router = Router::new()
        .route("/health", get(health))
        .route("/errors/codes", get(list_codes))
        .route("/errors/codes/:code", get(get_code))
        .route("/errors/render", post(render_error))
        .route("/metrics", get(metrics::metrics_handler))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Route layer so the matched path is available for labels
        .route_layer(middleware::from_fn(metrics::middleware::track_metrics));

    // Order matters: translation runs innermost so logging sees the final status
    with_error_translation(router, responder)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use crate::errors::{ErrorResponder, KnownRequestError};

/// Replace responses that carry a [`KnownRequestError`] with the translated body.
///
/// Handlers signal a database failure by returning
/// [`AppError::Database`](super::error::AppError::Database); every other
/// response passes through untouched.
pub async fn translate_errors(
    State(responder): State<ErrorResponder>,
    request: Request,
    next: Next,
) -> Response {
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<KnownRequestError>() {
        Some(err) => responder.handle(err, &path).into_response(),
        None => response,
    }
}

/// Attach the translation layer to a host router
pub fn with_error_translation<S>(router: Router<S>, responder: ErrorResponder) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(responder, translate_errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::AppError;
    use crate::errors::Locale;
    use axum::{body::Body, http::Request as HttpRequest, http::StatusCode, routing::get};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn failing() -> Result<&'static str, AppError> {
        Err(KnownRequestError::new("P2001", "Record not found")
            .with_meta("model", "User")
            .with_meta("field", "id")
            .with_meta("value", "7")
            .into())
    }

    async fn ok() -> Result<&'static str, AppError> {
        Ok("fine")
    }

    fn app(locale: Locale) -> Router {
        let router = Router::new()
            .route("/users/:id", get(failing))
            .route("/ok", get(ok));
        with_error_translation(router, ErrorResponder::new(locale))
    }

    #[tokio::test]
    async fn test_database_error_is_translated() {
        let response = app(Locale::En)
            .oneshot(
                HttpRequest::builder()
                    .uri("/users/7?verbose=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["path"], "/users/7?verbose=1");
        assert_eq!(
            json["message"],
            "The requested record in the where condition does not exist: User.id = 7"
        );
        assert_eq!(json["data"]["code"], "P2001");
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let response = app(Locale::PtBr)
            .oneshot(HttpRequest::builder().uri("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"fine");
    }
}

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::Service;

use prisma_error_responder::api::{
    handlers::AppState, routes::create_router, with_error_translation, AppError,
};
use prisma_error_responder::{ErrorResponder, KnownRequestError, Locale};

// Helper to create test app
fn create_test_app(locale: Locale) -> Router {
    create_router(AppState {
        responder: ErrorResponder::new(locale),
        instance_id: "test-instance".to_string(),
    })
}

// Helper to send request and parse JSON response
async fn send_json_request(app: &mut Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

// Helper to send JSON request with JSON body
async fn send_json_body_request(
    app: &mut Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let bytes = serde_json::to_vec(&body).unwrap();
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(bytes))
        .unwrap();

    let response = app.call(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let mut app = create_test_app(Locale::PtBr);
    let (status, body) = send_json_request(&mut app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "prisma-error-responder");
    assert_eq!(body["locale"], "pt-BR");
    assert_eq!(body["instance_id"], "test-instance");
}

#[tokio::test]
async fn test_list_codes() {
    let mut app = create_test_app(Locale::En);
    let (status, body) = send_json_request(&mut app, "GET", "/errors/codes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["locale"], "en");

    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 33);
    assert_eq!(entries[0]["code"], "P2000");
    assert_eq!(entries[0]["status"], 400);
}

#[tokio::test]
async fn test_list_codes_locale_override() {
    let mut app = create_test_app(Locale::En);
    let (status, body) = send_json_request(&mut app, "GET", "/errors/codes?locale=pt-BR").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locale"], "pt-BR");
}

#[tokio::test]
async fn test_list_codes_invalid_locale() {
    let mut app = create_test_app(Locale::En);
    let (status, body) = send_json_request(&mut app, "GET", "/errors/codes?locale=fr").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["request_id"].is_string());
}

#[tokio::test]
async fn test_get_code() {
    let mut app = create_test_app(Locale::En);
    let (status, body) = send_json_request(&mut app, "GET", "/errors/codes/P2034").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["code"], "P2034");
    assert_eq!(body["data"]["status"], 409);
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("write conflict or deadlock"));
}

#[tokio::test]
async fn test_get_code_not_found() {
    let mut app = create_test_app(Locale::En);
    let (status, body) = send_json_request(&mut app, "GET", "/errors/codes/P9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "CODE_NOT_FOUND");
}

#[tokio::test]
async fn test_render_unique_constraint() {
    let mut app = create_test_app(Locale::En);
    let exception = json!({
        "code": "P2002",
        "message": "Unique constraint failed on the fields: (`email`)",
        "meta": { "target": ["email"] },
        "clientVersion": "5.22.0"
    });
    let (status, body) =
        send_json_body_request(&mut app, "POST", "/errors/render", exception.clone()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["statusCode"], 409);
    assert_eq!(body["message"], "Uniqueness constraint failure in email");
    assert_eq!(body["path"], "/errors/render");
    assert_eq!(body["data"], exception);

    let timestamp = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
    let age = Utc::now() - timestamp.with_timezone(&Utc);
    assert!(age.num_seconds() < 5);
}

#[tokio::test]
async fn test_render_echoes_engine_fields_unchanged() {
    let mut app = create_test_app(Locale::En);
    let exception = json!({
        "name": "PrismaClientKnownRequestError",
        "code": "P2002",
        "message": "dup",
        "meta": { "modelName": "User", "target": ["email"] },
        "clientVersion": "5.22.0",
        "batchRequestIdx": 0
    });
    let (status, body) = send_json_body_request(
        &mut app,
        "POST",
        "/errors/render?dry_run=true",
        exception.clone(),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["data"], exception);
    assert_eq!(body["path"], "/errors/render?dry_run=true");
}

#[tokio::test]
async fn test_render_unknown_code_portuguese() {
    let mut app = create_test_app(Locale::PtBr);
    let (status, body) =
        send_json_body_request(&mut app, "POST", "/errors/render", json!({ "code": "P9999" }))
            .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["statusCode"], 500);
    assert_eq!(body["message"], "Erro interno do servidor");
}

#[tokio::test]
async fn test_host_router_translation() {
    async fn delete_post() -> Result<&'static str, AppError> {
        Err(KnownRequestError::new("P2025", "Record to delete does not exist.")
            .with_meta("cause", "Record to delete does not exist.")
            .into())
    }

    async fn crash() -> Result<&'static str, AppError> {
        Err(anyhow::anyhow!("socket closed").into())
    }

    let host = Router::new()
        .route("/posts/:id", get(delete_post))
        .route("/crash", get(crash));
    let mut app = with_error_translation(host, ErrorResponder::default());

    let (status, body) = send_json_request(&mut app, "GET", "/posts/17").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["path"], "/posts/17");
    assert_eq!(body["data"]["code"], "P2025");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .ends_with("not found: Record to delete does not exist."));

    let (status, body) = send_json_request(&mut app, "GET", "/crash").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let mut app = create_test_app(Locale::En);

    // Produce at least one translated error so the counter is exported
    send_json_body_request(&mut app, "POST", "/errors/render", json!({ "code": "P2001" })).await;

    let request = Request::builder()
        .method("GET")
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert!(text.contains("# HELP"));
    assert!(text.contains("known_request_errors_total"));
}

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use movies_core::readiness::ReadinessFlag;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use movies_api::router::build_app_router;
use movies_api::state::AppState;

/// Build the full application router, already marked ready.
pub fn build_test_app(pool: PgPool) -> Router {
    let readiness = ReadinessFlag::new();
    readiness.mark_ready();
    build_test_app_with_readiness(pool, readiness)
}

/// Build the full application router with a caller-owned readiness flag.
pub fn build_test_app_with_readiness(pool: PgPool, readiness: ReadinessFlag) -> Router {
    build_app_router(AppState { pool, readiness })
}

/// A pool that never connects until used. For routes that do not touch the database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://movies@localhost/movies_unused")
        .unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, form: &str) -> Response {
    send_form(app, Method::POST, uri, form).await
}

pub async fn put_form(app: Router, uri: &str, form: &str) -> Response {
    send_form(app, Method::PUT, uri, form).await
}

async fn send_form(app: Router, method: Method, uri: &str, form: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::Router;

use crate::state::AppState;

/// ANY /healthz -- liveness, always 200 regardless of method.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz -- 200 once the startup delay has elapsed, 503 before.
async fn readyz(State(state): State<AppState>) -> Response {
    if state.readiness.is_ready() {
        StatusCode::OK.into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable").into_response()
    }
}

/// Mount the liveness and readiness endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", any(healthz))
        .route("/readyz", get(readyz))
}

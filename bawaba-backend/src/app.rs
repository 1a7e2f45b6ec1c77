use std::sync::Arc;

use axum::extract::Extension;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware, Router};

use crate::state::AppState;

/// Build the primary axum router with the provided shared application state.
///
/// The CORS layer wraps the whole router so that method-mismatch (405) and
/// unknown-path (404) responses carry the policy headers too.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(crate::handlers::auth::login::login))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(middleware::from_fn(crate::cors::apply_cors_headers))
        .layer(Extension(state))
}

async fn health_handler() -> impl IntoResponse {
    // Liveness: always return 200 OK when process is alive.
    (axum::http::StatusCode::OK, "OK")
}

async fn ready_handler(
    Extension(_state): Extension<Arc<AppState>>,
) -> impl IntoResponse {
    // Readiness: state is fully wired before the router is built, so being
    // able to reach this handler means the service can take traffic.
    (axum::http::StatusCode::OK, "OK")
}

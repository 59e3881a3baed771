//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /test`            - Static liveness probe
//! - `GET  /`                - 400, no short code given
//! - `GET  /{code}`          - Short link redirect
//! - `/api/v1/*`             - REST API (see [`crate::api::routes`])
//!
//! Static routes take precedence over `/{code}`, so an alias equal to `test`
//! can be stored but is not reachable through a redirect.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, `GET`/`POST`/`PUT`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{missing_code_handler, redirect_handler, test_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_handler))
        .route("/", get(missing_code_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api/v1", api::routes::v1_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] behind trailing-slash trimming.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

//! Cross-origin policy applied to every route.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS: any origin, any request header, `GET`/`POST`/`PUT`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any)
}

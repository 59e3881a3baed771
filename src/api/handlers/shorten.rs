//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{error, info};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one long URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com/very/long/path",
///   "customAlias": "my-link",            // optional
///   "expiresAt": "2030-01-01T00:00:00Z"  // optional
/// }
/// ```
///
/// `url` is accepted in place of `longUrl`.
///
/// # Response
///
/// ```json
/// {
///   "message": "URL shortened successfully",
///   "shortId": "aB3dE9",
///   "originalUrl": "https://example.com/very/long/path",
///   "createdAt": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON or any field fails validation
/// - 500 on any store failure, including a taken alias
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        info!(error = %rejection, "rejected shorten request body");
        AppError::bad_request("Invalid JSON body")
    })?;

    let request = payload.into_validated()?;

    let link = state
        .link_service
        .create_short_link(request.long_url, request.custom_alias, request.expires_at)
        .await
        .map_err(|err| {
            error!(error = %err, "failed to create short link");
            AppError::internal("Error shortening URL")
        })?;

    info!(code = %link.code, "short link created");

    Ok(Json(link.into()))
}

//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject an empty or blank code with 400
/// 2. Look the code up by exact match
/// 3. Unknown code: 404
/// 4. Known code: 302 Found with `Location` set to the stored URL, unmodified
///
/// # Errors
///
/// Returns 500 if the store cannot be reached or the stored URL cannot be
/// sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if code.trim().is_empty() {
        return Err(AppError::bad_request("Invalid short code"));
    }

    let link = state.link_service.resolve(&code).await.map_err(|err| {
        error!(error = %err, %code, "failed to resolve short code");
        AppError::internal("Error redirecting URL")
    })?;

    let Some(link) = link else {
        debug!(%code, "short code not found");
        return Err(AppError::not_found("Short code not found"));
    };

    // TODO: decide whether an expired `expires_at` should yield 404 or 410, then
    // enforce it here; until then expiry is stored but not checked.
    let location = HeaderValue::try_from(link.long_url).map_err(|err| {
        error!(error = %err, %code, "stored URL is not a valid Location header");
        AppError::internal("Error redirecting URL")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Answers `GET /` where no short code was supplied.
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("Invalid short code")
}

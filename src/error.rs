//! Application error type and its HTTP representation.
//!
//! Store-level kinds ([`AppError::DuplicateKey`], [`AppError::StoreUnavailable`],
//! [`AppError::ExhaustedRetries`]) stay distinct internally so they can be logged
//! precisely, but all of them render as a generic `500` to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more request fields violate the create contract.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The request could not be read at all (malformed JSON, empty code).
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// The short code is already taken.
    #[error("short code `{code}` already exists")]
    DuplicateKey { code: String },

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    /// Every generated code collided with an existing row.
    #[error("no free short code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateKey { .. }
            | Self::StoreUnavailable(_)
            | Self::ExhaustedRetries { .. }
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::BadRequest { message } => ("bad_request", message, Value::Null),
            AppError::NotFound { message } => ("not_found", message, Value::Null),
            AppError::Internal { message } => ("internal_error", message, Value::Null),
            other => {
                tracing::error!(error = %other, "unhandled store error reached the response layer");
                ("internal_error", "Internal server error".to_string(), Value::Null)
            }
        };

        let body = ErrorBody {
            code,
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::StoreUnavailable(e)
    }
}

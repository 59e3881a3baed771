//! DTOs for the link shortening endpoint.

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::Link;
use crate::error::AppError;

/// Compiled regex for custom alias validation.
static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,30}$").unwrap());

/// Request to shorten a single URL.
///
/// `url` is accepted as an alias of `longUrl` for clients of the first API
/// revision. A missing URL deserializes as empty and fails validation.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(rename = "longUrl", alias = "url", default)]
    #[validate(
        url(code = "InvalidUrl", message = "Invalid URL"),
        length(max = 2048, code = "InvalidUrl", message = "URL too long"),
        custom(function = "validate_redirect_target")
    )]
    pub long_url: String,

    #[serde(rename = "customAlias")]
    #[validate(regex(
        path = "*CUSTOM_ALIAS_REGEX",
        code = "InvalidAlias",
        message = "Alias must be 3-30 characters of letters, digits, '_' or '-'"
    ))]
    pub custom_alias: Option<String>,

    /// ISO-8601 / RFC 3339 timestamp. Stored, not enforced.
    #[serde(rename = "expiresAt")]
    #[validate(custom(function = "validate_expires_at"))]
    pub expires_at: Option<String>,
}

/// A shorten request whose every field satisfies the create contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidShortenRequest {
    pub long_url: String,
    pub custom_alias: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortenRequest {
    /// Validates the request and converts it into its typed form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every violated field.
    pub fn into_validated(self) -> Result<ValidShortenRequest, AppError> {
        self.validate().map_err(validation_error)?;

        let expires_at = self
            .expires_at
            .as_deref()
            .map(parse_expiry)
            .transpose()
            .map_err(|_| {
                AppError::validation(
                    "Invalid input",
                    json!([{ "field": "expiresAt", "reason": "InvalidExpiry", "message": "Invalid datetime" }]),
                )
            })?;

        Ok(ValidShortenRequest {
            long_url: self.long_url,
            custom_alias: self.custom_alias,
            expires_at,
        })
    }
}

fn parse_expiry(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc))
}

fn validate_expires_at(value: &str) -> Result<(), ValidationError> {
    parse_expiry(value).map(|_| ()).map_err(|_| {
        ValidationError::new("InvalidExpiry").with_message(Cow::Borrowed("Invalid datetime"))
    })
}

/// URL parsing silently cleans control characters, so the raw string is
/// checked against what a `Location` header can carry.
fn validate_redirect_target(value: &str) -> Result<(), ValidationError> {
    HeaderValue::from_str(value).map(|_| ()).map_err(|_| {
        ValidationError::new("InvalidUrl")
            .with_message(Cow::Borrowed("URL contains characters not allowed in a redirect"))
    })
}

/// Wire name of a request field as it appears in JSON.
fn wire_field_name(field: &str) -> &str {
    match field {
        "long_url" | "longUrl" => "longUrl",
        "custom_alias" | "customAlias" => "customAlias",
        "expires_at" | "expiresAt" => "expiresAt",
        other => other,
    }
}

/// Flattens validator errors into a sorted `[{field, reason, message}]` list.
fn validation_error(errors: ValidationErrors) -> AppError {
    let mut violations: Vec<_> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = wire_field_name(&field).to_string();
            errs.iter()
                .map(move |e| {
                    json!({
                        "field": field,
                        "reason": e.code,
                        "message": e.message.as_deref().unwrap_or("Invalid value"),
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect();

    violations.sort_by(|a, b| a["field"].as_str().cmp(&b["field"].as_str()));

    AppError::validation("Invalid input", violations.into())
}

/// Response for a successfully created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub message: &'static str,
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<Link> for ShortenResponse {
    fn from(link: Link) -> Self {
        Self {
            message: "URL shortened successfully",
            short_id: link.code,
            original_url: link.long_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(body: Value) -> ShortenRequest {
        serde_json::from_value(body).unwrap()
    }

    fn violations(err: AppError) -> Vec<(String, String)> {
        match err {
            AppError::Validation { details, .. } => details
                .as_array()
                .unwrap()
                .iter()
                .map(|v| {
                    (
                        v["field"].as_str().unwrap().to_string(),
                        v["reason"].as_str().unwrap().to_string(),
                    )
                })
                .collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request() {
        let request = parse(json!({
            "longUrl": "https://example.com/very/long/path",
            "customAlias": "my-link_1",
            "expiresAt": "2030-01-01T00:00:00Z"
        }));

        let valid = request.into_validated().unwrap();
        assert_eq!(valid.long_url, "https://example.com/very/long/path");
        assert_eq!(valid.custom_alias.as_deref(), Some("my-link_1"));
        assert!(valid.expires_at.is_some());
    }

    #[test]
    fn test_legacy_url_key_is_accepted() {
        let valid = parse(json!({ "url": "https://example.com" }))
            .into_validated()
            .unwrap();
        assert_eq!(valid.long_url, "https://example.com");
        assert!(valid.custom_alias.is_none());
    }

    #[test]
    fn test_missing_url_is_invalid_url() {
        let err = parse(json!({})).into_validated().unwrap_err();
        assert_eq!(
            violations(err),
            vec![("longUrl".to_string(), "InvalidUrl".to_string())]
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        let err = parse(json!({ "longUrl": "not-a-url" }))
            .into_validated()
            .unwrap_err();
        assert_eq!(
            violations(err),
            vec![("longUrl".to_string(), "InvalidUrl".to_string())]
        );
    }

    #[test]
    fn test_too_long_url_rejected() {
        let long = format!("https://example.com/{}", "a".repeat(2048));
        let err = parse(json!({ "longUrl": long })).into_validated().unwrap_err();
        assert_eq!(
            violations(err),
            vec![("longUrl".to_string(), "InvalidUrl".to_string())]
        );
    }

    #[test]
    fn test_control_characters_in_url_rejected() {
        for url in ["https://example.com/a\u{1}b", "https://example.com/a\nb"] {
            let err = parse(json!({ "longUrl": url })).into_validated().unwrap_err();
            assert_eq!(
                violations(err),
                vec![("longUrl".to_string(), "InvalidUrl".to_string())],
                "url {url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_alias_boundaries() {
        let thirty = "x".repeat(30);
        let thirty_one = "x".repeat(31);

        for alias in ["abc", "A_b-9", thirty.as_str()] {
            let result = parse(json!({ "longUrl": "https://example.com", "customAlias": alias }))
                .into_validated();
            assert!(result.is_ok(), "alias {alias:?} should be accepted");
        }

        for alias in ["ab", thirty_one.as_str(), "has space", "slash/", "dot.dot", ""] {
            let err = parse(json!({ "longUrl": "https://example.com", "customAlias": alias }))
                .into_validated()
                .unwrap_err();
            assert_eq!(
                violations(err),
                vec![("customAlias".to_string(), "InvalidAlias".to_string())],
                "alias {alias:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_expiry_rejected() {
        let err = parse(json!({ "longUrl": "https://example.com", "expiresAt": "tomorrow" }))
            .into_validated()
            .unwrap_err();
        assert_eq!(
            violations(err),
            vec![("expiresAt".to_string(), "InvalidExpiry".to_string())]
        );
    }

    #[test]
    fn test_every_violated_field_is_reported() {
        let err = parse(json!({
            "longUrl": "nope",
            "customAlias": "!",
            "expiresAt": "2030-13-45"
        }))
        .into_validated()
        .unwrap_err();

        let fields: Vec<String> = violations(err).into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["customAlias", "expiresAt", "longUrl"]);
    }

    #[test]
    fn test_response_shape() {
        let link = Link::new(
            1,
            "aB3dE9".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            None,
        );

        let body = serde_json::to_value(ShortenResponse::from(link)).unwrap();
        assert_eq!(body["message"], "URL shortened successfully");
        assert_eq!(body["shortId"], "aB3dE9");
        assert_eq!(body["originalUrl"], "https://example.com");
        assert!(body.get("createdAt").is_some());
        assert!(body.get("expiresAt").is_none());
    }
}

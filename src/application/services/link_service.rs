//! Link creation and resolution service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Default number of generated codes tried before giving up.
pub const DEFAULT_CODE_ATTEMPTS: usize = 5;

/// Service for creating and resolving short links.
///
/// Input is expected to be validated already (see
/// [`crate::api::dto::shorten::ShortenRequest::into_validated`]).
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    max_attempts: usize,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>, max_attempts: usize) -> Self {
        Self {
            link_repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Creates a short link.
    ///
    /// # Code Selection
    ///
    /// - If `custom_alias` is provided it is inserted as-is, exactly once
    /// - Otherwise a random code is generated and inserted; on
    ///   [`AppError::DuplicateKey`] a fresh code is generated, up to the
    ///   configured number of attempts
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if the alias is already taken.
    /// Returns [`AppError::ExhaustedRetries`] if every generated code collided.
    /// Returns [`AppError::StoreUnavailable`] on database errors (never retried).
    pub async fn create_short_link(
        &self,
        long_url: String,
        custom_alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        if let Some(code) = custom_alias {
            return self
                .link_repository
                .create(NewLink {
                    code,
                    long_url,
                    expires_at,
                })
                .await;
        }

        for attempt in 1..=self.max_attempts {
            let new_link = NewLink {
                code: generate_code(),
                long_url: long_url.clone(),
                expires_at,
            };

            match self.link_repository.create(new_link).await {
                Err(AppError::DuplicateKey { code }) => {
                    warn!(%code, attempt, "generated short code collided, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    /// Looks up a link by its exact short code.
    ///
    /// A missing code is `Ok(None)`, not an error.
    pub async fn resolve(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = self.link_repository.find_by_code(code).await?;
        debug!(code, found = link.is_some(), "resolved short code");
        Ok(link)
    }

    /// Returns the number of stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Checks that the backing store answers.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

//! Repository trait for admin API tokens.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Admin API token record.
///
/// Only the HMAC-SHA256 digest of the raw token is stored.
#[derive(Debug, Clone)]
pub struct AdminToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl AdminToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}

/// Repository interface for admin token management.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Returns `true` if a non-revoked token has this hash.
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Stamps `last_used_at` after a successful authentication.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a token with the same hash already exists.
    async fn create_token(&self, name: &str, token_hash: &str) -> Result<AdminToken, AppError>;

    /// Lists all tokens, newest first.
    async fn list_tokens(&self) -> Result<Vec<AdminToken>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<AdminToken>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<AdminToken>, AppError>;

    /// Sets `revoked_at`; a no-op for already revoked tokens.
    async fn revoke_token(&self, id: i64) -> Result<(), AppError>;
}

//! Repository trait for ad data access and counters.

use crate::domain::entities::{Ad, AdPatch, Counter, NewAd};
use crate::error::AppError;
use async_trait::async_trait;

/// Ordering for ad listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdSort {
    /// Newest first.
    #[default]
    Created,
    /// Most viewed first.
    Views,
    /// Most clicked first.
    Clicks,
}

/// Repository interface for ads.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAdRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_ad.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Creates a new ad with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is taken.
    /// Returns [`AppError::Validation`] if the image or location does not exist.
    async fn create(&self, new_ad: NewAd) -> Result<Ad, AppError>;

    /// Finds an ad by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Ad>, AppError>;

    /// Returns every published ad assigned to the location.
    ///
    /// This is the eligible set the selector picks from.
    async fn list_published_for_location(&self, location_id: i64) -> Result<Vec<Ad>, AppError>;

    /// Lists ads page by page in the requested order.
    async fn list(&self, sort: AdSort, offset: i64, limit: i64) -> Result<Vec<Ad>, AppError>;

    /// Counts all ads.
    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update. Counters are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no ad has this id.
    async fn update(&self, id: i64, patch: AdPatch) -> Result<Ad, AppError>;

    /// Deletes an ad. Returns `Ok(false)` when it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically increments one counter by exactly one.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(n))` with the new counter value
    /// - `Ok(None)` if no ad has this id
    async fn increment(&self, id: i64, counter: Counter) -> Result<Option<i64>, AppError>;
}

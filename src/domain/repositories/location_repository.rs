//! Repository trait for delivery locations.

use crate::domain::entities::{Location, LocationPatch, NewLocation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for locations.
///
/// The delivery path only reads ([`Self::find_by_slug`]); the remaining
/// methods back the admin API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is taken.
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, AppError>;

    /// Finds a location by its unique slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Location>, AppError>;

    /// Lists all locations ordered by name.
    async fn list(&self) -> Result<Vec<Location>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no location has this id.
    async fn update(&self, id: i64, patch: LocationPatch) -> Result<Location, AppError>;

    /// Deletes a location; ads assigned to it become unassigned.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

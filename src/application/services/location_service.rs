//! Location lookup for delivery and location management for the admin API.

use std::sync::Arc;

use crate::domain::entities::{Location, LocationPatch, NewLocation};
use crate::domain::repositories::LocationRepository;
use crate::domain::size_catalog::SizeCatalog;
use crate::error::AppError;
use crate::utils::dimension::normalize_dimension;
use crate::utils::slug::{is_valid_slug, slugify};
use serde_json::json;

/// Resolves location slugs and manages location records.
pub struct LocationService<R: LocationRepository> {
    repository: Arc<R>,
}

impl<R: LocationRepository> LocationService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a slug for the delivery path.
    ///
    /// Unknown slugs and repository failures both yield `None`; the latter is
    /// logged since the visitor only ever sees an empty slot.
    pub async fn resolve_by_slug(&self, slug: &str) -> Option<Location> {
        match self.repository.find_by_slug(slug).await {
            Ok(Some(location)) => Some(location),
            Ok(None) => {
                tracing::debug!(slug, "location not found");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, slug, "failed to resolve location");
                None
            }
        }
    }

    /// Creates a location.
    ///
    /// The slug defaults to a slugified `name`. Dimensions are stored without
    /// CSS units.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unusable slug or an unknown size
    /// and [`AppError::Conflict`] if the slug is taken.
    pub async fn create(
        &self,
        slug: Option<String>,
        name: String,
        size_id: Option<String>,
        width: Option<String>,
        height: Option<String>,
    ) -> Result<Location, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Location name is required",
                json!({ "field": "name" }),
            ));
        }

        let slug = match slug {
            Some(slug) => {
                let slug = slug.trim().to_string();
                if !is_valid_slug(&slug) {
                    return Err(AppError::bad_request(
                        "Invalid location slug",
                        json!({ "slug": slug }),
                    ));
                }
                slug
            }
            None => slugify(&name).ok_or_else(|| {
                AppError::bad_request(
                    "Cannot derive a slug from the location name",
                    json!({ "name": name }),
                )
            })?,
        };

        let new_location = NewLocation {
            slug,
            name,
            size_id: checked_size(size_id)?,
            width: width.as_deref().and_then(normalize_dimension),
            height: height.as_deref().and_then(normalize_dimension),
        };

        self.repository.create(new_location).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no location has this id.
    pub async fn get(&self, id: i64) -> Result<Location, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found", json!({ "id": id })))
    }

    pub async fn list(&self) -> Result<Vec<Location>, AppError> {
        self.repository.list().await
    }

    /// Applies a partial update.
    ///
    /// `Some(None)` clears a field; dimensions that normalize to nothing are
    /// cleared as well.
    pub async fn update(&self, id: i64, mut patch: LocationPatch) -> Result<Location, AppError> {
        if let Some(name) = patch.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::bad_request(
                    "Location name cannot be empty",
                    json!({ "field": "name" }),
                ));
            }
        }

        if let Some(size_id) = patch.size_id.take() {
            patch.size_id = Some(checked_size(size_id)?);
        }
        patch.width = patch
            .width
            .map(|w| w.as_deref().and_then(normalize_dimension));
        patch.height = patch
            .height
            .map(|h| h.as_deref().and_then(normalize_dimension));

        self.repository.update(id, patch).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no location has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Location not found", json!({ "id": id })))
        }
    }
}

/// Accepts only identifiers from the standard catalog; blank means unsized.
fn checked_size(size_id: Option<String>) -> Result<Option<String>, AppError> {
    match size_id.map(|s| s.trim().to_string()) {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) if SizeCatalog::is_known(&s) => Ok(Some(s)),
        Some(s) => Err(AppError::bad_request(
            "Unknown ad size",
            json!({ "size_id": s }),
        )),
    }
}

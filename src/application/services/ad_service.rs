//! Ad management for the admin API.

use std::sync::Arc;

use crate::domain::entities::{Ad, AdPatch, NewAd};
use crate::domain::repositories::{AdRepository, AdSort};
use crate::error::AppError;
use crate::utils::link_validator::validate_link;
use crate::utils::slug::{is_valid_slug, slugify};
use serde_json::json;

/// Fields accepted when creating an ad.
#[derive(Debug, Clone, Default)]
pub struct AdDraft {
    pub slug: Option<String>,
    pub title: String,
    pub content: String,
    pub image_id: Option<i64>,
    pub link: Option<String>,
    pub location_id: Option<i64>,
    pub published: bool,
}

/// Creates, edits and lists ads. Counters are never written here.
pub struct AdService<R: AdRepository> {
    repository: Arc<R>,
}

impl<R: AdRepository> AdService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an ad with zeroed counters.
    ///
    /// The slug defaults to the slugified title. An invalid link is dropped
    /// rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing title or unusable slug,
    /// [`AppError::Conflict`] if the slug is taken.
    pub async fn create(&self, draft: AdDraft) -> Result<Ad, AppError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request(
                "Ad title is required",
                json!({ "field": "title" }),
            ));
        }

        let slug = match draft.slug.map(|s| s.trim().to_string()) {
            Some(slug) if is_valid_slug(&slug) => slug,
            Some(slug) => {
                return Err(AppError::bad_request(
                    "Invalid ad slug",
                    json!({ "slug": slug }),
                ));
            }
            None => slugify(&title).ok_or_else(|| {
                AppError::bad_request(
                    "Cannot derive a slug from the ad title",
                    json!({ "title": title }),
                )
            })?,
        };

        let new_ad = NewAd {
            slug,
            title,
            content: draft.content,
            image_id: draft.image_id,
            link: draft.link.as_deref().and_then(checked_link),
            location_id: draft.location_id,
            published: draft.published,
        };

        self.repository.create(new_ad).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no ad has this id.
    pub async fn get(&self, id: i64) -> Result<Ad, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ad not found", json!({ "id": id })))
    }

    /// Returns one page of ads and the total count.
    ///
    /// `page` is 1-based.
    pub async fn list(
        &self,
        sort: AdSort,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Ad>, i64), AppError> {
        let offset = (page.max(1) - 1) * page_size;
        let ads = self.repository.list(sort, offset, page_size).await?;
        let total = self.repository.count().await?;
        Ok((ads, total))
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Applies a partial update.
    ///
    /// A link that fails validation is skipped and the stored link is kept.
    pub async fn update(&self, id: i64, mut patch: AdPatch) -> Result<Ad, AppError> {
        if let Some(title) = patch.title.as_mut() {
            *title = title.trim().to_string();
            if title.is_empty() {
                return Err(AppError::bad_request(
                    "Ad title cannot be empty",
                    json!({ "field": "title" }),
                ));
            }
        }

        patch.link = patch.link.as_deref().and_then(checked_link);

        self.repository.update(id, patch).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no ad has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Ad not found", json!({ "id": id })))
        }
    }
}

fn checked_link(raw: &str) -> Option<String> {
    match validate_link(raw) {
        Ok(link) => Some(link),
        Err(e) => {
            tracing::debug!(error = %e, link = raw, "ignoring invalid ad link");
            None
        }
    }
}

//! DTOs for ad management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::Ad;

/// Request body for `POST /api/ads`.
///
/// `link` is not validated here: an unusable link is dropped by the service
/// and the ad is created without one.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdRequest {
    #[validate(length(max = 64, message = "Slug must be at most 64 characters"))]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub content: String,

    pub image_id: Option<i64>,
    pub link: Option<String>,
    pub location_id: Option<i64>,

    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// Request body for `PATCH /api/ads/{id}`.
///
/// All fields are optional. For `image_id` and `location_id`, `null` clears
/// the reference while an absent field leaves it unchanged.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAdRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub content: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image_id: Option<Option<i64>>,

    pub link: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub location_id: Option<Option<i64>>,

    pub published: Option<bool>,
}

/// JSON representation of an ad.
#[derive(Debug, Serialize)]
pub struct AdItem {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub image_id: Option<i64>,
    pub link: Option<String>,
    pub location_id: Option<i64>,
    pub view_count: i64,
    pub click_count: i64,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Ad> for AdItem {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            slug: ad.slug,
            title: ad.title,
            content: ad.content,
            image_id: ad.image_id,
            link: ad.link,
            location_id: ad.location_id,
            view_count: ad.view_count,
            click_count: ad.click_count,
            published: ad.published,
            created_at: ad.created_at,
        }
    }
}

/// Paginated list of ads.
#[derive(Debug, Serialize)]
pub struct AdListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<AdItem>,
}

//! DTOs for location management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use crate::domain::entities::Location;

/// Request body for `POST /api/locations`.
///
/// `width` and `height` accept CSS units (`px`, `pt`, `em`, `rem`), which are
/// stripped; `width` may also be a percentage.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(length(max = 64, message = "Slug must be at most 64 characters"))]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    pub size_id: Option<String>,

    #[validate(length(max = 16))]
    pub width: Option<String>,

    #[validate(length(max = 16))]
    pub height: Option<String>,
}

/// Request body for `PATCH /api/locations/{id}`.
///
/// `null` clears `size_id`, `width` or `height`; absent fields are unchanged.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub size_id: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub width: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub height: Option<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct LocationItem {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub size_id: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Location> for LocationItem {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            slug: location.slug,
            name: location.name,
            size_id: location.size_id,
            width: location.width,
            height: location.height,
            created_at: location.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub items: Vec<LocationItem>,
}

//! Ad entity: a single creative with its counters.

use chrono::{DateTime, Utc};

/// A creative unit: either an uploaded image with a destination link, or raw
/// embeddable markup.
///
/// `content` is opaque third-party markup and is emitted verbatim when the ad
/// has no image. `view_count` and `click_count` are only ever changed by the
/// delivery path, never by administrative edits.
#[derive(Debug, Clone)]
pub struct Ad {
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

impl Ad {
    /// Creates a published ad with zeroed counters.
    pub fn new(
        id: i64,
        slug: String,
        title: String,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            title,
            content,
            image_id: None,
            link: None,
            location_id: None,
            view_count: 0,
            click_count: 0,
            published: true,
            created_at,
        }
    }

    pub fn with_image(mut self, image_id: i64) -> Self {
        self.image_id = Some(image_id);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn at_location(mut self, location_id: i64) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn has_image(&self) -> bool {
        self.image_id.is_some()
    }
}

/// Input data for creating an ad.
#[derive(Debug, Clone)]
pub struct NewAd {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub image_id: Option<i64>,
    pub link: Option<String>,
    pub location_id: Option<i64>,
    pub published: bool,
}

/// Partial update for an ad.
///
/// Outer `None` leaves the field unchanged; `Some(None)` clears it.
/// Counters are intentionally absent.
#[derive(Debug, Clone, Default)]
pub struct AdPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_id: Option<Option<i64>>,
    pub link: Option<String>,
    pub location_id: Option<Option<i64>>,
    pub published: Option<bool>,
}

/// Which counter of an ad to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Views,
    Clicks,
}

impl Counter {
    /// Column backing this counter.
    pub fn column(self) -> &'static str {
        match self {
            Counter::Views => "view_count",
            Counter::Clicks => "click_count",
        }
    }
}

/// An uploaded banner image.
#[derive(Debug, Clone)]
pub struct Image {
    pub id: i64,
    pub file_name: String,
}

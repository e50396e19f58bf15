//! Location entity: a named delivery slot for ads.

use chrono::{DateTime, Utc};

/// A delivery slot (e.g. "sidebar", "footer") ads are assigned to.
///
/// Sizing comes from `size_id` when it names a catalog size. Otherwise the
/// free-form `width`/`height` pair is used; both may be absent, in which case
/// ads are delivered at their natural size.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub size_id: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Location {
    /// Creates a location without any sizing information.
    pub fn new(id: i64, slug: String, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug,
            name,
            size_id: None,
            width: None,
            height: None,
            created_at,
        }
    }

    pub fn with_size(mut self, size_id: impl Into<String>) -> Self {
        self.size_id = Some(size_id.into());
        self
    }

    pub fn with_dimensions(mut self, width: Option<String>, height: Option<String>) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Input data for creating a location.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub slug: String,
    pub name: String,
    pub size_id: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

/// Partial update for a location.
///
/// Outer `None` leaves the field unchanged; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub size_id: Option<Option<String>>,
    pub width: Option<Option<String>>,
    pub height: Option<Option<String>>,
}

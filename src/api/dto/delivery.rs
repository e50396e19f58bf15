//! DTOs for the public delivery endpoints.

use serde::{Deserialize, Serialize};

/// Request body for `POST /ads/render`.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub content: String,
}

/// Content with every ad shortcode expanded.
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub content: String,
}

/// Form body for `POST /ads/click`.
///
/// `ad_id` is kept as a string so that malformed values reach the counter
/// service and produce the `error` token instead of a rejection.
#[derive(Debug, Deserialize)]
pub struct ClickForm {
    pub ad_id: Option<String>,
}

//! Handlers that deliver ad markup to visitors.

use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};

use crate::api::dto::delivery::{RenderRequest, RenderResponse};
use crate::state::AppState;

/// Renders one ad for a location.
///
/// # Endpoint
///
/// `GET /ads/{slug}`
///
/// # Response
///
/// Always `200 OK` with `text/html`. The body is empty when the location is
/// unknown or has no eligible ad, so the page can embed it unconditionally.
/// Each non-empty response counts one view for the rendered ad.
pub async fn render_location_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Html<String> {
    Html(state.delivery_service.render_ads_for_location(&slug).await)
}

/// Expands ad shortcodes embedded in a piece of content.
///
/// # Endpoint
///
/// `POST /ads/render`
///
/// # Request Body
///
/// ```json
/// { "content": "<p>Intro</p>[ad location=\"sidebar\"]" }
/// ```
///
/// `[wp-adposts location="..."]` is accepted as well. A shortcode without a
/// `location` is removed, as is every shortcode past
/// [`MAX_SHORTCODES`](crate::application::services::delivery_service::MAX_SHORTCODES).
pub async fn render_content_handler(
    State(state): State<AppState>,
    Json(payload): Json<RenderRequest>,
) -> Json<RenderResponse> {
    let content = state
        .delivery_service
        .expand_shortcodes(&payload.content)
        .await;

    Json(RenderResponse { content })
}

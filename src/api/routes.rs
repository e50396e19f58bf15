//! API route configuration.
//!
//! Public delivery routes are open to any visitor; admin routes require
//! Bearer token authentication via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    ad_list_handler, click_handler, create_ad_handler, create_location_handler,
    delete_ad_handler, delete_location_handler, get_ad_handler, get_image_handler,
    get_location_handler, location_list_handler, register_image_handler, render_content_handler,
    render_location_handler, sizes_handler,
    update_ad_handler, update_location_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Delivery routes called from visitor pages.
///
/// # Endpoints
///
/// - `GET  /ads/{slug}`   - Markup of one ad for a location (empty when none)
/// - `POST /ads/render`   - Expand `[ad location="..."]` shortcodes in content
/// - `POST /ads/click`    - Count a click; answers `success` or `error`
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/ads/render", post(render_content_handler))
        .route("/ads/click", post(click_handler))
        .route("/ads/{slug}", get(render_location_handler))
}

/// Admin routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /sizes`            - Size catalog and enabled sizes
/// - `GET    /locations`        - List locations
/// - `POST   /locations`        - Create a location
/// - `GET    /locations/{id}`   - Fetch a location
/// - `PATCH  /locations/{id}`   - Update a location
/// - `DELETE /locations/{id}`   - Delete a location
/// - `POST   /images`           - Register an uploaded image
/// - `GET    /images/{id}`      - Image with its variant URLs
/// - `GET    /ads`              - List ads, sortable by views or clicks
/// - `POST   /ads`              - Create an ad
/// - `GET    /ads/{id}`         - Fetch an ad
/// - `PATCH  /ads/{id}`         - Update an ad
/// - `DELETE /ads/{id}`         - Delete an ad
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/sizes", get(sizes_handler))
        .route(
            "/locations",
            get(location_list_handler).post(create_location_handler),
        )
        .route(
            "/locations/{id}",
            get(get_location_handler)
                .patch(update_location_handler)
                .delete(delete_location_handler),
        )
        .route("/images", post(register_image_handler))
        .route("/images/{id}", get(get_image_handler))
        .route("/ads", get(ad_list_handler).post(create_ad_handler))
        .route(
            "/ads/{id}",
            get(get_ad_handler)
                .patch(update_ad_handler)
                .delete(delete_ad_handler),
        )
}

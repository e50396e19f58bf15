//! Handler for the size catalog.

use axum::{Json, extract::State};

use crate::api::dto::sizes::SizesResponse;
use crate::domain::size_catalog::STANDARD_SIZES;
use crate::state::AppState;

/// Lists the standard sizes, the enabled subset and its image variants.
///
/// # Endpoint
///
/// `GET /api/sizes`
///
/// The enabled subset is the one loaded at startup; changes made with
/// `admin sizes set` show up after a restart.
pub async fn sizes_handler(State(state): State<AppState>) -> Json<SizesResponse> {
    Json(SizesResponse {
        standard: STANDARD_SIZES,
        enabled: state.catalog.enabled_sizes().to_vec(),
        image_variants: state.catalog.image_variants(),
    })
}

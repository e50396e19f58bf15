//! Handlers for location management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::locations::{
    CreateLocationRequest, LocationItem, LocationListResponse, UpdateLocationRequest,
};
use crate::domain::entities::LocationPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all locations ordered by name.
///
/// # Endpoint
///
/// `GET /api/locations`
pub async fn location_list_handler(
    State(state): State<AppState>,
) -> Result<Json<LocationListResponse>, AppError> {
    let locations = state.location_service.list().await?;

    Ok(Json(LocationListResponse {
        items: locations.into_iter().map(LocationItem::from).collect(),
    }))
}

/// Creates a location.
///
/// # Endpoint
///
/// `POST /api/locations`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Sidebar",
///   "slug": "sidebar",     // optional, derived from name
///   "size_id": "300x250",  // optional, must be a standard size
///   "width": "100%",       // optional, used when size_id is unset
///   "height": "250px"      // optional, units are stripped
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for an unknown size or invalid slug; 409 if the slug is taken.
pub async fn create_location_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<LocationItem>), AppError> {
    payload.validate()?;

    let location = state
        .location_service
        .create(
            payload.slug,
            payload.name,
            payload.size_id,
            payload.width,
            payload.height,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(LocationItem::from(location))))
}

/// # Endpoint
///
/// `GET /api/locations/{id}`
pub async fn get_location_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LocationItem>, AppError> {
    let location = state.location_service.get(id).await?;
    Ok(Json(LocationItem::from(location)))
}

/// Partially updates a location.
///
/// # Endpoint
///
/// `PATCH /api/locations/{id}`
///
/// `null` clears `size_id`, `width` or `height`.
pub async fn update_location_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLocationRequest>,
) -> Result<Json<LocationItem>, AppError> {
    payload.validate()?;

    let patch = LocationPatch {
        name: payload.name,
        size_id: payload.size_id,
        width: payload.width,
        height: payload.height,
    };

    let location = state.location_service.update(id, patch).await?;

    Ok(Json(LocationItem::from(location)))
}

/// Deletes a location. Ads assigned to it stay, unassigned.
///
/// # Endpoint
///
/// `DELETE /api/locations/{id}`
pub async fn delete_location_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.location_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

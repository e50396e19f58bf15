//! Handlers for image registration.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::images::{ImageItem, RegisterImageRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Registers an uploaded file so ads can reference it by `image_id`.
///
/// # Endpoint
///
/// `POST /api/images`
///
/// # Request Body
///
/// ```json
/// { "file_name": "2025/spring-banner.png" }
/// ```
///
/// # Response
///
/// `201 Created` with the image id and the URLs of the original and of every
/// variant the media host should provide for the enabled sizes.
pub async fn register_image_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterImageRequest>,
) -> Result<(StatusCode, Json<ImageItem>), AppError> {
    payload.validate()?;

    let image = state.image_service.register(&payload.file_name).await?;
    let variants = state.image_service.variant_urls(&image);

    Ok((StatusCode::CREATED, Json(ImageItem::new(image, variants))))
}

/// # Endpoint
///
/// `GET /api/images/{id}`
pub async fn get_image_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ImageItem>, AppError> {
    let image = state.image_service.get(id).await?;
    let variants = state.image_service.variant_urls(&image);

    Ok(Json(ImageItem::new(image, variants)))
}

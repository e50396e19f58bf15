//! Handlers for ad management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::ads::{AdItem, AdListResponse, CreateAdRequest, UpdateAdRequest};
use crate::api::dto::pagination::{AdListQuery, PaginationMeta};
use crate::application::services::AdDraft;
use crate::domain::entities::AdPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Lists ads with their counters.
///
/// # Endpoint
///
/// `GET /api/ads?sort=views|clicks|created&page=1&page_size=20`
///
/// `views` and `clicks` sort by the counter, highest first; `created` (the
/// default) lists newest first.
///
/// # Errors
///
/// Returns 400 for an unknown sort key or invalid pagination.
pub async fn ad_list_handler(
    State(state): State<AppState>,
    Query(query): Query<AdListQuery>,
) -> Result<Json<AdListResponse>, AppError> {
    let (page, page_size) = query
        .pagination
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({})))?;
    let sort = query
        .sort()
        .map_err(|e| AppError::bad_request(e, json!({ "sort": query.sort })))?;

    let (ads, total) = state
        .ad_service
        .list(sort, i64::from(page), i64::from(page_size))
        .await?;

    Ok(Json(AdListResponse {
        pagination: PaginationMeta::new(page, page_size, total),
        items: ads.into_iter().map(AdItem::from).collect(),
    }))
}

/// Creates an ad.
///
/// # Endpoint
///
/// `POST /api/ads`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Spring sale",
///   "slug": "spring-sale",                  // optional, derived from title
///   "content": "<script>...</script>",      // raw embed code, optional
///   "image_id": 3,                          // optional
///   "link": "https://shop.example.com",     // optional, dropped if invalid
///   "location_id": 1,                       // optional
///   "published": true                       // optional, default true
/// }
/// ```
///
/// # Errors
///
/// Returns 400 on validation failure or a reference to a missing image or
/// location; 409 if the slug is taken.
pub async fn create_ad_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdRequest>,
) -> Result<(StatusCode, Json<AdItem>), AppError> {
    payload.validate()?;

    let ad = state
        .ad_service
        .create(AdDraft {
            slug: payload.slug,
            title: payload.title,
            content: payload.content,
            image_id: payload.image_id,
            link: payload.link,
            location_id: payload.location_id,
            published: payload.published,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AdItem::from(ad))))
}

/// # Endpoint
///
/// `GET /api/ads/{id}`
pub async fn get_ad_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<AdItem>, AppError> {
    let ad = state.ad_service.get(id).await?;
    Ok(Json(AdItem::from(ad)))
}

/// Partially updates an ad.
///
/// # Endpoint
///
/// `PATCH /api/ads/{id}`
///
/// Counters cannot be changed here. An invalid `link` is ignored and the
/// current link stays in place.
///
/// # Errors
///
/// Returns 404 if the ad does not exist.
pub async fn update_ad_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateAdRequest>,
) -> Result<Json<AdItem>, AppError> {
    payload.validate()?;

    let patch = AdPatch {
        title: payload.title,
        content: payload.content,
        image_id: payload.image_id,
        link: payload.link,
        location_id: payload.location_id,
        published: payload.published,
    };

    let ad = state.ad_service.update(id, patch).await?;

    Ok(Json(AdItem::from(ad)))
}

/// # Endpoint
///
/// `DELETE /api/ads/{id}`
pub async fn delete_ad_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.ad_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

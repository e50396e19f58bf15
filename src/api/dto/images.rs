//! DTOs for image registration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::image_service::VariantUrl;
use crate::domain::entities::Image;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterImageRequest {
    /// Path of the uploaded file relative to `MEDIA_BASE_URL`.
    #[validate(length(min = 1, max = 255, message = "File name must be 1-255 characters"))]
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct ImageVariantItem {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl From<VariantUrl> for ImageVariantItem {
    fn from(variant: VariantUrl) -> Self {
        Self {
            name: variant.name,
            url: variant.url,
            width: variant.size.map(|(w, _)| w),
            height: variant.size.map(|(_, h)| h),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageItem {
    pub id: i64,
    pub file_name: String,
    pub variants: Vec<ImageVariantItem>,
}

impl ImageItem {
    pub fn new(image: Image, variants: Vec<VariantUrl>) -> Self {
        Self {
            id: image.id,
            file_name: image.file_name,
            variants: variants.into_iter().map(ImageVariantItem::from).collect(),
        }
    }
}

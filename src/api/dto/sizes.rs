//! DTOs for the size catalog endpoint.

use serde::Serialize;

use crate::domain::entities::{ImageVariant, Size};

/// Full catalog plus the subset enabled at startup.
#[derive(Debug, Serialize)]
pub struct SizesResponse {
    pub standard: &'static [Size],
    pub enabled: Vec<String>,
    pub image_variants: Vec<ImageVariant>,
}

//! Public URLs for uploaded images.
//!
//! Uploaded files are served by the host (CDN, static file server) under
//! `MEDIA_BASE_URL`. Size variants sit next to the original, suffixed with the
//! variant name:
//!
//! ```text
//! full        -> https://cdn.example.com/uploads/banner.png
//! ad-300x250  -> https://cdn.example.com/uploads/banner-ad-300x250.png
//! ```

use crate::domain::entities::Image;

/// Variant name for the unscaled original.
pub const FULL_VARIANT: &str = "full";

#[derive(Debug, Clone)]
pub struct MediaUrls {
    base_url: String,
}

impl MediaUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Builds the URL of one variant of an image.
    pub fn variant_url(&self, image: &Image, variant: &str) -> String {
        let file_name = image.file_name.trim_start_matches('/');

        if variant == FULL_VARIANT {
            return format!("{}/{}", self.base_url, file_name);
        }

        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => {
                format!("{}/{}-{}.{}", self.base_url, stem, variant, ext)
            }
            _ => format!("{}/{}-{}", self.base_url, file_name, variant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(file_name: &str) -> Image {
        Image {
            id: 1,
            file_name: file_name.to_string(),
        }
    }

    #[test]
    fn test_full_variant_is_original() {
        let media = MediaUrls::new("https://cdn.example.com/uploads/");
        assert_eq!(
            media.variant_url(&image("banner.png"), FULL_VARIANT),
            "https://cdn.example.com/uploads/banner.png"
        );
    }

    #[test]
    fn test_sized_variant_suffix() {
        let media = MediaUrls::new("https://cdn.example.com/uploads");
        assert_eq!(
            media.variant_url(&image("2024/banner.png"), "ad-300x250"),
            "https://cdn.example.com/uploads/2024/banner-ad-300x250.png"
        );
    }

    #[test]
    fn test_variant_without_extension() {
        let media = MediaUrls::new("/media");
        assert_eq!(media.variant_url(&image("banner"), "ad-728"), "/media/banner-ad-728");
        assert_eq!(
            media.variant_url(&image("v1.0/banner"), "ad-728"),
            "/media/v1.0/banner-ad-728"
        );
    }
}

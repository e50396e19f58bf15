//! Registration of uploaded banner images.
//!
//! Files are uploaded to the media host out of band; this service records the
//! file name so ads can reference it, and lists the variant URLs the host is
//! expected to serve for the enabled sizes.

use std::sync::Arc;

use crate::domain::entities::Image;
use crate::domain::repositories::ImageRepository;
use crate::domain::size_catalog::SizeCatalog;
use crate::error::AppError;
use crate::infrastructure::media::{FULL_VARIANT, MediaUrls};
use serde_json::json;

const MAX_FILE_NAME_LEN: usize = 255;

/// One servable rendition of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantUrl {
    pub name: String,
    pub url: String,
    /// `None` for the unscaled original.
    pub size: Option<(u32, u32)>,
}

pub struct ImageService<R: ImageRepository> {
    repository: Arc<R>,
    media: MediaUrls,
    catalog: Arc<SizeCatalog>,
}

impl<R: ImageRepository> ImageService<R> {
    pub fn new(repository: Arc<R>, media: MediaUrls, catalog: Arc<SizeCatalog>) -> Self {
        Self {
            repository,
            media,
            catalog,
        }
    }

    /// Records an uploaded file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty name, a name with a
    /// `..` segment, or a full URL instead of a path under the media base.
    pub async fn register(&self, file_name: &str) -> Result<Image, AppError> {
        let file_name = file_name.trim().trim_start_matches('/');

        if file_name.is_empty() || file_name.len() > MAX_FILE_NAME_LEN {
            return Err(AppError::bad_request(
                "Image file name must be 1-255 characters",
                json!({ "field": "file_name" }),
            ));
        }
        if file_name.contains("://") || file_name.split('/').any(|segment| segment == "..") {
            return Err(AppError::bad_request(
                "Image file name must be a path under the media base URL",
                json!({ "file_name": file_name }),
            ));
        }

        self.repository.create(file_name).await
    }

    pub async fn get(&self, id: i64) -> Result<Image, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Image not found", json!({ "id": id })))
    }

    /// The original followed by one hard-cropped variant per enabled size.
    pub fn variant_urls(&self, image: &Image) -> Vec<VariantUrl> {
        let original = VariantUrl {
            name: FULL_VARIANT.to_string(),
            url: self.media.variant_url(image, FULL_VARIANT),
            size: None,
        };

        std::iter::once(original)
            .chain(self.catalog.image_variants().into_iter().map(|variant| VariantUrl {
                url: self.media.variant_url(image, &variant.name),
                size: Some((variant.width, variant.height)),
                name: variant.name,
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockImageRepository;

    fn service(repo: MockImageRepository) -> ImageService<MockImageRepository> {
        ImageService::new(
            Arc::new(repo),
            MediaUrls::new("/uploads"),
            Arc::new(SizeCatalog::new(["728x90", "88x31"])),
        )
    }

    #[tokio::test]
    async fn test_register_strips_leading_slash() {
        let mut repo = MockImageRepository::new();
        repo.expect_create()
            .withf(|name| name == "2025/banner.png")
            .times(1)
            .returning(|name| {
                Ok(Image {
                    id: 1,
                    file_name: name.to_string(),
                })
            });

        let image = service(repo).register(" /2025/banner.png ").await.unwrap();

        assert_eq!(image.file_name, "2025/banner.png");
    }

    #[tokio::test]
    async fn test_register_rejects_traversal_and_urls() {
        let mut repo = MockImageRepository::new();
        repo.expect_create().never();
        let service = service(repo);

        for name in ["", "../secret.png", "a/../../b.png", "https://evil.example/x.png"] {
            assert!(
                matches!(service.register(name).await, Err(AppError::Validation { .. })),
                "{name:?}"
            );
        }
    }

    #[test]
    fn test_variant_urls_follow_enabled_sizes() {
        let image = Image {
            id: 3,
            file_name: "banner.jpg".to_string(),
        };

        let urls = service(MockImageRepository::new()).variant_urls(&image);

        assert_eq!(
            urls,
            vec![
                VariantUrl {
                    name: "full".to_string(),
                    url: "/uploads/banner.jpg".to_string(),
                    size: None,
                },
                VariantUrl {
                    name: "ad-728x90".to_string(),
                    url: "/uploads/banner-ad-728x90.jpg".to_string(),
                    size: Some((728, 90)),
                },
                VariantUrl {
                    name: "ad-88x31".to_string(),
                    url: "/uploads/banner-ad-88x31.jpg".to_string(),
                    size: Some((88, 31)),
                },
            ]
        );
    }
}

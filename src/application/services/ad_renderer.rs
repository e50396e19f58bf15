//! Markup generation for a selected ad.
//!
//! Output shape:
//!
//! ```html
//! <div id="wp-adpost-7" class="wp-adpost wp-adpost-7 wp-adpost-300x250 wp-adpost-spring-sale">
//!   <a class="wp-adpost-link" data-ad="7" href="https://shop.example.com" target="_blank">PAYLOAD</a>
//! </div>
//! ```
//!
//! (Emitted on a single line.) `PAYLOAD` is an `<img>` tag for image ads and
//! the raw, unescaped content for embed ads.

use std::sync::Arc;

use askama::Template;

use crate::domain::entities::{Ad, Image, Location, ResolvedSize};
use crate::domain::repositories::ImageRepository;
use crate::domain::size_catalog::SizeCatalog;
use crate::infrastructure::media::MediaUrls;

#[derive(Template)]
#[template(
    source = r#"<div id="wp-adpost-{{ id }}" class="{{ classes }}"><a class="wp-adpost-link" data-ad="{{ id }}" href="{{ href }}" target="_blank">{{ payload|safe }}</a></div>"#,
    ext = "html"
)]
struct AdMarkup<'a> {
    id: i64,
    classes: &'a str,
    href: &'a str,
    payload: &'a str,
}

#[derive(Template)]
#[template(source = r#"<img src="{{ src }}" alt="{{ alt }}" />"#, ext = "html")]
struct ImageTag<'a> {
    src: &'a str,
    alt: &'a str,
}

/// Renders ads into their container markup.
pub struct AdRenderer<I: ImageRepository> {
    images: Arc<I>,
    media: MediaUrls,
    catalog: Arc<SizeCatalog>,
}

impl<I: ImageRepository> AdRenderer<I> {
    pub fn new(images: Arc<I>, media: MediaUrls, catalog: Arc<SizeCatalog>) -> Self {
        Self {
            images,
            media,
            catalog,
        }
    }

    /// Builds the markup for `ad` placed at `location`.
    ///
    /// Returns `None` only when templating fails. An image that cannot be
    /// loaded falls back to the ad's raw content.
    pub async fn render(&self, ad: &Ad, location: &Location) -> Option<String> {
        let size = self.catalog.effective_size(location);

        let payload = match self.image_payload(ad, &size).await {
            Some(tag) => tag,
            None => ad.content.clone(),
        };

        let classes = container_classes(ad, &size);
        let markup = AdMarkup {
            id: ad.id,
            classes: &classes,
            href: ad.link.as_deref().unwrap_or_default(),
            payload: &payload,
        };

        match markup.render() {
            Ok(html) => Some(html),
            Err(e) => {
                tracing::error!(error = %e, ad_id = ad.id, "failed to render ad markup");
                None
            }
        }
    }

    async fn image_payload(&self, ad: &Ad, size: &ResolvedSize) -> Option<String> {
        let image_id = ad.image_id?;

        let image = match self.images.find_by_id(image_id).await {
            Ok(Some(image)) => image,
            Ok(None) => {
                tracing::warn!(ad_id = ad.id, image_id, "ad image not found, using content");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, ad_id = ad.id, image_id, "failed to load ad image");
                return None;
            }
        };

        self.image_tag(&image, &ad.title, size)
    }

    fn image_tag(&self, image: &Image, title: &str, size: &ResolvedSize) -> Option<String> {
        let src = self.media.variant_url(image, &size.image_variant());
        let tag = ImageTag { src: &src, alt: title };

        tag.render()
            .inspect_err(|e| tracing::warn!(error = %e, image_id = image.id, "failed to render image tag"))
            .ok()
    }
}

fn container_classes(ad: &Ad, size: &ResolvedSize) -> String {
    let mut classes = format!("wp-adpost wp-adpost-{}", ad.id);
    if let Some(suffix) = size.class_suffix() {
        classes.push_str(" wp-adpost-");
        classes.push_str(&suffix);
    }
    classes.push_str(" wp-adpost-");
    classes.push_str(&ad.slug);
    classes
}

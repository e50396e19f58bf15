//! Ad delivery: slug in, markup out.
//!
//! ```text
//! slug -> LocationService -> AdSelector -> AdRenderer -> CounterService (view) -> markup
//! ```
//!
//! Nothing on this path is reported to the visitor as an error. Anything that
//! goes wrong before markup exists yields an empty string; a failed view
//! increment is logged and the markup is still returned.

use std::sync::Arc;

use crate::application::services::{AdRenderer, AdSelector, CounterService, LocationService};
use crate::domain::repositories::{AdRepository, ImageRepository, LocationRepository};
use crate::utils::shortcode::{find_shortcodes, splice};

/// Shortcodes expanded per piece of content; later ones are removed unrendered.
pub const MAX_SHORTCODES: usize = 10;

pub struct DeliveryService<L, A, I>
where
    L: LocationRepository,
    A: AdRepository,
    I: ImageRepository,
{
    locations: Arc<LocationService<L>>,
    selector: AdSelector<A>,
    renderer: AdRenderer<I>,
    counters: Arc<CounterService<A>>,
}

impl<L, A, I> DeliveryService<L, A, I>
where
    L: LocationRepository,
    A: AdRepository,
    I: ImageRepository,
{
    pub fn new(
        locations: Arc<LocationService<L>>,
        selector: AdSelector<A>,
        renderer: AdRenderer<I>,
        counters: Arc<CounterService<A>>,
    ) -> Self {
        Self {
            locations,
            selector,
            renderer,
            counters,
        }
    }

    /// Renders one ad for the location named `slug`.
    ///
    /// Returns an empty string when the location is unknown, has no eligible
    /// ad, or rendering fails. Each non-empty result counts as one view.
    pub async fn render_ads_for_location(&self, slug: &str) -> String {
        let Some(location) = self.locations.resolve_by_slug(slug).await else {
            return String::new();
        };

        let ad = match self.selector.select_for(&location).await {
            Ok(Some(ad)) => ad,
            Ok(None) => {
                tracing::debug!(slug, "no eligible ads");
                return String::new();
            }
            Err(e) => {
                tracing::error!(error = %e, slug, "failed to select ad");
                return String::new();
            }
        };

        let Some(markup) = self.renderer.render(&ad, &location).await else {
            return String::new();
        };

        match self.counters.increment_view(ad.id).await {
            Ok(Some(views)) => tracing::debug!(ad_id = ad.id, views, "view recorded"),
            Ok(None) => tracing::warn!(ad_id = ad.id, "ad vanished before its view was recorded"),
            Err(e) => tracing::error!(error = %e, ad_id = ad.id, "failed to record view"),
        }

        markup
    }

    /// Replaces every `[ad location="..."]` shortcode in `content`.
    ///
    /// Shortcodes are expanded in order of appearance; one without a
    /// `location` expands to nothing. Only the first [`MAX_SHORTCODES`] are
    /// rendered, so one request records at most that many views.
    pub async fn expand_shortcodes(&self, content: &str) -> String {
        let shortcodes = find_shortcodes(content);
        if shortcodes.is_empty() {
            return content.to_string();
        }
        if shortcodes.len() > MAX_SHORTCODES {
            tracing::warn!(
                found = shortcodes.len(),
                limit = MAX_SHORTCODES,
                "too many shortcodes, extra ones removed"
            );
        }

        let mut rendered = Vec::with_capacity(shortcodes.len());
        for (index, shortcode) in shortcodes.iter().enumerate() {
            let markup = match shortcode.location.as_deref() {
                Some(slug) if index < MAX_SHORTCODES => self.render_ads_for_location(slug).await,
                _ => String::new(),
            };
            rendered.push(markup);
        }

        splice(content, &shortcodes, &rendered)
    }
}

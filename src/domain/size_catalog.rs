//! Fixed registry of standard banner sizes and the operator-enabled subset.
//!
//! The catalog itself never changes at runtime. The enabled subset is read
//! from the `settings` table once at startup and frozen into a
//! [`SizeCatalog`] value shared by all request handlers.

use crate::domain::entities::{Height, ImageVariant, Location, ResolvedSize, Size, Width};

/// All standard banner sizes shipped with the service.
pub const STANDARD_SIZES: &[Size] = &[
    Size::new("88x31", 88, 31),
    Size::new("120x60", 120, 60),
    Size::new("120x90", 120, 90),
    Size::new("120x240", 120, 240),
    Size::new("120x600", 120, 600),
    Size::new("125x125", 125, 125),
    Size::new("160x600", 160, 600),
    Size::new("180x150", 180, 150),
    Size::new("234x60", 234, 60),
    Size::new("250x250", 250, 250),
    Size::new("300x100", 300, 100),
    Size::new("300x250", 300, 250),
    Size::new("300x600", 300, 600),
    Size::new("336x280", 336, 280),
    Size::new("468x60", 468, 60),
    Size::new("728x90", 728, 90),
    Size::new("728x300", 728, 300),
];

/// Sizes enabled when the operator has not configured any.
pub const DEFAULT_ENABLED_SIZES: &[&str] = &["300x250", "468x60", "728x90"];

/// Standard sizes plus the enabled subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeCatalog {
    enabled: Vec<String>,
}

impl SizeCatalog {
    /// Builds a catalog from the configured enabled sizes.
    ///
    /// Unknown identifiers and duplicates are dropped, order is preserved.
    /// Falls back to [`DEFAULT_ENABLED_SIZES`] when nothing valid remains.
    pub fn new<I, S>(enabled: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sizes: Vec<String> = Vec::new();
        for id in enabled {
            let id = id.as_ref().trim();
            if Self::is_known(id) && !sizes.iter().any(|s| s == id) {
                sizes.push(id.to_string());
            }
        }

        if sizes.is_empty() {
            return Self::with_defaults();
        }

        Self { enabled: sizes }
    }

    pub fn with_defaults() -> Self {
        Self {
            enabled: DEFAULT_ENABLED_SIZES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Looks up a size in the full catalog.
    pub fn resolve(&self, size_id: &str) -> Option<(u32, u32)> {
        STANDARD_SIZES
            .iter()
            .find(|s| s.id == size_id)
            .map(|s| (s.width, s.height))
    }

    pub fn is_known(size_id: &str) -> bool {
        STANDARD_SIZES.iter().any(|s| s.id == size_id)
    }

    /// Enabled size identifiers in configured order.
    pub fn enabled_sizes(&self) -> &[String] {
        &self.enabled
    }

    /// Image variants (`ad-<sizeId>`, hard-cropped) to generate for uploads.
    pub fn image_variants(&self) -> Vec<ImageVariant> {
        self.enabled
            .iter()
            .filter_map(|id| {
                self.resolve(id).map(|(width, height)| ImageVariant {
                    name: format!("ad-{}", id),
                    width,
                    height,
                    crop: true,
                })
            })
            .collect()
    }

    /// Computes the size ads are rendered at for a location.
    ///
    /// Precedence:
    /// 1. the location's catalog size, when it exists in the catalog
    /// 2. the location's custom width/height
    /// 3. natural size (no width, `auto` height)
    pub fn effective_size(&self, location: &Location) -> ResolvedSize {
        if let Some((width, height)) = location.size_id.as_deref().and_then(|id| self.resolve(id)) {
            return ResolvedSize::fixed(width, height);
        }

        let width = match location.width.as_deref().map(str::trim) {
            Some(w) if w.contains('%') => Width::Percent(w.to_string()),
            Some(w) => match w.parse::<u32>() {
                Ok(px) if px > 0 => Width::Pixels(px),
                _ => Width::Natural,
            },
            None => Width::Natural,
        };

        let height = match location.height.as_deref().map(str::trim) {
            Some(h) => match h.parse::<u32>() {
                Ok(px) if px > 0 => Height::Pixels(px),
                _ => Height::Auto,
            },
            None => Height::Auto,
        };

        ResolvedSize { width, height }
    }
}

impl Default for SizeCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

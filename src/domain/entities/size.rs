//! Banner size types and the effective rendering size of a location.

use serde::Serialize;

/// A standard banner size from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub id: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(id: &'static str, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }
}

/// Horizontal dimension an ad is rendered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Width {
    /// No width constraint: the creative keeps its natural size.
    Natural,
    Pixels(u32),
    /// Relative width such as `100%`, kept verbatim.
    Percent(String),
}

/// Vertical dimension an ad is rendered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    Auto,
    Pixels(u32),
}

/// The size an ad is actually rendered at for a given location.
///
/// Drives two naming decisions:
/// - the image variant requested from the media store ([`Self::image_variant`])
/// - the size class added to the ad container ([`Self::class_suffix`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSize {
    pub width: Width,
    pub height: Height,
}

impl ResolvedSize {
    pub fn fixed(width: u32, height: u32) -> Self {
        Self {
            width: Width::Pixels(width),
            height: Height::Pixels(height),
        }
    }

    /// Full/natural size with `auto` height.
    pub fn natural() -> Self {
        Self {
            width: Width::Natural,
            height: Height::Auto,
        }
    }

    /// Name of the image variant to request for this size.
    ///
    /// - `full` when the width is undefined or relative
    /// - `ad-<w>` when the height is `auto`
    /// - `ad-<w>x<h>` otherwise
    pub fn image_variant(&self) -> String {
        match (&self.width, self.height) {
            (Width::Natural | Width::Percent(_), _) => "full".to_string(),
            (Width::Pixels(w), Height::Auto) => format!("ad-{}", w),
            (Width::Pixels(w), Height::Pixels(h)) => format!("ad-{}x{}", w, h),
        }
    }

    /// Size part of the container class (`300x250` or `300`).
    ///
    /// Only present when a concrete pixel width is known.
    pub fn class_suffix(&self) -> Option<String> {
        match (&self.width, self.height) {
            (Width::Pixels(w), Height::Pixels(h)) => Some(format!("{}x{}", w, h)),
            (Width::Pixels(w), Height::Auto) => Some(w.to_string()),
            _ => None,
        }
    }
}

/// An image variant generated for every enabled size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageVariant {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub crop: bool,
}

//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the CLI a
//! narrow API. The delivery core is split the same way the request flows:
//!
//! - [`services::LocationService`] - Slug resolution and location management
//! - [`services::AdSelector`] - Uniform random choice among eligible ads
//! - [`services::AdRenderer`] - Container and image markup
//! - [`services::CounterService`] - Atomic view and click counters
//! - [`services::DeliveryService`] - Render orchestration and shortcode expansion
//!
//! Admin-side services:
//!
//! - [`services::AdService`] - Ad creation, editing and listing
//! - [`services::ImageService`] - Registration of uploaded images and their variant URLs
//! - [`services::SettingsService`] - Enabled ad sizes
//! - [`services::AuthService`] - API token authentication

pub mod services;

//! Business logic services for the application layer.

pub mod ad_renderer;
pub mod ad_selector;
pub mod ad_service;
pub mod auth_service;
pub mod counter_service;
pub mod delivery_service;
pub mod image_service;
pub mod location_service;
pub mod settings_service;

pub use ad_renderer::AdRenderer;
pub use ad_selector::AdSelector;
pub use ad_service::{AdDraft, AdService};
pub use auth_service::{AuthService, hash_token};
pub use counter_service::{ClickOutcome, CounterService};
pub use delivery_service::DeliveryService;
pub use image_service::ImageService;
pub use location_service::LocationService;
pub use settings_service::SettingsService;

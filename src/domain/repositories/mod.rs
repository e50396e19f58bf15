//! Repository trait definitions for the domain layer.
//!
//! These traits are the "content repository" the delivery core reads from.
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! mock implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`AdRepository`] - Ads, eligibility queries and atomic counters
//! - [`LocationRepository`] - Delivery locations
//! - [`ImageRepository`] - Uploaded banner images
//! - [`SettingsRepository`] - Enabled ad sizes
//! - [`TokenRepository`] - Admin API tokens
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod ad_repository;
pub mod image_repository;
pub mod location_repository;
pub mod settings_repository;
pub mod token_repository;

pub use ad_repository::{AdRepository, AdSort};
pub use image_repository::ImageRepository;
pub use location_repository::LocationRepository;
pub use settings_repository::{AD_SIZES_KEY, SettingsRepository};
pub use token_repository::{AdminToken, TokenRepository};

#[cfg(test)]
pub use ad_repository::MockAdRepository;
#[cfg(test)]
pub use image_repository::MockImageRepository;
#[cfg(test)]
pub use location_repository::MockLocationRepository;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;

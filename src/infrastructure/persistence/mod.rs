//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgAdRepository`] - Ads, eligible-set queries and atomic counters
//! - [`PgLocationRepository`] - Delivery locations
//! - [`PgImageRepository`] - Uploaded banner images
//! - [`PgSettingsRepository`] - Enabled ad sizes
//! - [`PgTokenRepository`] - Admin token storage and validation

pub mod pg_ad_repository;
pub mod pg_image_repository;
pub mod pg_location_repository;
pub mod pg_settings_repository;
pub mod pg_token_repository;

pub use pg_ad_repository::PgAdRepository;
pub use pg_image_repository::PgImageRepository;
pub use pg_location_repository::PgLocationRepository;
pub use pg_settings_repository::PgSettingsRepository;
pub use pg_token_repository::PgTokenRepository;

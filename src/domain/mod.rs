//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`size_catalog`] - Standard banner sizes and effective size resolution
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application::services`].
//!
//! # Render Flow
//!
//! 1. Location slug is resolved via [`repositories::LocationRepository`]
//! 2. Eligible ads are loaded via [`repositories::AdRepository`] and one is drawn at random
//! 3. Markup is built using the size from [`size_catalog::SizeCatalog::effective_size`]
//! 4. The view counter is incremented atomically

pub mod entities;
pub mod repositories;
pub mod size_catalog;

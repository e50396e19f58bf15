//! Infrastructure layer for external integrations.
//!
//! Implements the repository interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`media`] - Public URLs of uploaded images and their size variants

pub mod media;
pub mod persistence;

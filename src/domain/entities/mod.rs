//! Core domain entities representing the ad delivery data model.
//!
//! Entities are plain data structures; behaviour lives in the catalog and in
//! the application services.
//!
//! # Entity Types
//!
//! - [`Ad`] - A creative (image or raw embed) with view/click counters
//! - [`Location`] - A named delivery slot, optionally sized
//! - [`Size`] / [`ResolvedSize`] - Catalog sizes and the effective render size
//! - [`Image`] - An uploaded banner image
//!
//! # Design Pattern
//!
//! Separate structs are used for creation and partial updates:
//! - `NewAd`, `NewLocation` - For creating new records
//! - `AdPatch`, `LocationPatch` - For partial updates

pub mod ad;
pub mod location;
pub mod size;

pub use ad::{Ad, AdPatch, Counter, Image, NewAd};
pub use location::{Location, LocationPatch, NewLocation};
pub use size::{Height, ImageVariant, ResolvedSize, Size, Width};

//! Helpers shared by the services and the admin CLI.
//!
//! - [`dimension`] - Location dimension normalization
//! - [`link_validator`] - Ad destination link validation
//! - [`shortcode`] - `[ad location="..."]` shortcode parsing
//! - [`slug`] - Slug derivation from titles and names

pub mod dimension;
pub mod link_validator;
pub mod shortcode;
pub mod slug;

//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod ads;
pub mod click;
pub mod health;
pub mod images;
pub mod locations;
pub mod render;
pub mod sizes;

pub use ads::{
    ad_list_handler, create_ad_handler, delete_ad_handler, get_ad_handler, update_ad_handler,
};
pub use click::click_handler;
pub use health::health_handler;
pub use images::{get_image_handler, register_image_handler};
pub use locations::{
    create_location_handler, delete_location_handler, get_location_handler,
    location_list_handler, update_location_handler,
};
pub use render::{render_content_handler, render_location_handler};
pub use sizes::sizes_handler;

//! HTTP surface.
//!
//! Two audiences share this layer: visitor pages calling the public delivery
//! endpoints, and operators calling the token-protected admin API.
//!
//! - [`dto`] - request and response bodies
//! - [`handlers`] - one async fn per endpoint
//! - [`middleware`] - bearer auth, per-IP rate limits, request tracing
//! - [`routes`] - public and admin route tables

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

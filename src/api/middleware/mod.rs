//! HTTP middleware for request processing and protection.
//!
//! - [`auth`] - Bearer token check for `/api`
//! - [`rate_limit`] - Per-IP token buckets
//! - [`tracing`] - Request spans and response logging

pub mod auth;
pub mod rate_limit;
pub mod tracing;

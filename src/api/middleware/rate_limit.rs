//! Per-IP rate limiting using the token bucket algorithm.
//!
//! Two budgets exist: a generous one for the public delivery endpoints, which
//! a single page view may hit several times, and a strict one for the admin
//! API.

use axum::Router;
use axum::body::Body;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token bucket parameters.
#[derive(Debug, Clone, Copy)]
pub struct Quota {
    /// Seconds between token refills.
    pub per_second: u64,
    pub burst_size: u32,
}

/// Public endpoints: 2 requests per second, bursts of 100.
pub const PUBLIC: Quota = Quota {
    per_second: 2,
    burst_size: 100,
};

/// Admin endpoints: 1 request per second, bursts of 10.
pub const ADMIN: Quota = Quota {
    per_second: 1,
    burst_size: 10,
};

/// Wraps `router` with a rate limiter keyed by client IP.
///
/// With `behind_proxy` the IP comes from `X-Forwarded-For` / `X-Real-IP` /
/// `Forwarded`, falling back to the peer address. Otherwise only the socket
/// peer address is used, since those headers are client-controlled.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let public = rate_limit::apply(Router::new().route("/ads/{slug}", get(h)), rate_limit::PUBLIC, false);
/// ```
pub fn apply<S>(router: Router<S>, quota: Quota, behind_proxy: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if behind_proxy {
        router.layer(governor_layer(quota, SmartIpKeyExtractor))
    } else {
        router.layer(governor_layer(quota, PeerIpKeyExtractor))
    }
}

fn governor_layer<K>(quota: Quota, key_extractor: K) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(quota.per_second)
            .burst_size(quota.burst_size)
            .finish()
            .expect("rate limit quotas are non-zero constants"),
    );

    GovernorLayer::new(governor_conf)
}

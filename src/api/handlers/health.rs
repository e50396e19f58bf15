//! Handler for the health endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, ServiceStatus};
use crate::state::AppState;

/// Reports whether ads can be delivered.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: database reachable
/// - **503 Service Unavailable**: database check failed, with the same body
///
/// The `sizes` entry is informational: it lists the sizes loaded at startup.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 12 ads" },
///     "sizes": { "status": "ok", "message": "Enabled: 300x250, 468x60, 728x90" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let checks = HealthChecks {
        database: check_database(&state).await,
        sizes: check_sizes(&state),
    };

    let (code, status) = if checks.all_ok() {
        (StatusCode::OK, ServiceStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded)
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }),
    )
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.ad_service.count().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {count} ads")),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unavailable");
            CheckStatus::error(format!("Database error: {e}"))
        }
    }
}

fn check_sizes(state: &AppState) -> CheckStatus {
    CheckStatus::ok(format!("Enabled: {}", state.catalog.enabled_sizes().join(", ")))
}

//! Guards the `/api` routes that manage ads, locations, images and sizes.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Admits an `/api` request only when it carries a live admin token.
///
/// Operators get tokens from `admin token create` and send them as
/// `Authorization: Bearer <token>`. The server keeps only the token's HMAC,
/// keyed with `TOKEN_SIGNING_SECRET`. Ad delivery and click counting are
/// mounted outside `/api`, so visitors never reach this check.
///
/// Rejections answer `401` with `WWW-Authenticate: Bearer`; the JSON
/// `details.reason` tells a missing header apart from a bad token.
///
/// ```rust,ignore
/// let admin = protected_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(state): State<AppState>,
    bearer: Result<AuthBearer, (StatusCode, &'static str)>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Ok(AuthBearer(token)) = bearer else {
        tracing::debug!(uri = %req.uri(), "admin request without bearer token");
        return Err(AppError::unauthorized(
            "Admin token required",
            json!({ "reason": "No bearer token in Authorization header" }),
        ));
    };

    if let Err(e) = state.auth_service.authenticate(&token).await {
        tracing::warn!(uri = %req.uri(), method = %req.method(), "admin token rejected");
        return Err(e);
    }

    Ok(next.run(req).await)
}

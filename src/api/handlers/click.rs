//! Handler for click reports sent by the embedded ad script.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
};

use crate::api::dto::delivery::ClickForm;
use crate::state::AppState;

/// Counts one click for an ad.
///
/// # Endpoint
///
/// `POST /ads/click` with form body `ad_id=<n>`
///
/// # Response
///
/// Always `200 OK` with body `success` or `error`. A missing, malformed or
/// non-positive `ad_id` is an `error` and nothing is written.
pub async fn click_handler(
    State(state): State<AppState>,
    form: Result<Form<ClickForm>, FormRejection>,
) -> &'static str {
    let raw_ad_id = match &form {
        Ok(Form(form)) => form.ad_id.as_deref(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable click form");
            None
        }
    };

    state
        .counter_service
        .increment_click(raw_ad_id)
        .await
        .as_str()
}

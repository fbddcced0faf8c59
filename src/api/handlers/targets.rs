//! Handlers for the target list and navigation.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::selection::{SelectTargetRequest, SelectionResponse};
use crate::api::dto::targets::TargetListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the known target URLs.
///
/// # Endpoint
///
/// `GET /api/targets`
pub async fn list_targets_handler(State(state): State<AppState>) -> Json<TargetListResponse> {
    Json(state.dashboard.list_targets().await.into())
}

/// Reloads the target list from the upstream.
///
/// # Endpoint
///
/// `POST /api/targets/refresh`
///
/// # Errors
///
/// Returns 502 Bad Gateway if the upstream fails; the previous list is kept.
pub async fn refresh_targets_handler(
    State(state): State<AppState>,
) -> Result<Json<TargetListResponse>, AppError> {
    let targets = state.dashboard.refresh_url_list().await?;
    Ok(Json(targets.into()))
}

/// Navigates to a target URL and loads its statistics.
///
/// # Endpoint
///
/// `POST /api/targets/select`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `url` is empty
/// - 404 Not Found if the target is unknown
/// - 502 Bad Gateway if statistics cannot be loaded
pub async fn select_target_handler(
    State(state): State<AppState>,
    Json(payload): Json<SelectTargetRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let url = payload.url.trim();
    if url.is_empty() {
        return Err(AppError::bad_request(
            "Field 'url' must not be empty",
            json!({ "field": "url" }),
        ));
    }

    let view = state.dashboard.select_target(url).await?;
    Ok(Json(view.into()))
}

/// Reloads the statistics of the current target, keeping its selection.
///
/// # Endpoint
///
/// `POST /api/targets/reload`
///
/// # Errors
///
/// - 409 Conflict if no target is selected
/// - 502 Bad Gateway if statistics cannot be loaded
pub async fn reload_statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<SelectionResponse>, AppError> {
    let view = state.dashboard.reload_statistics().await?;
    Ok(Json(view.into()))
}

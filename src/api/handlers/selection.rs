//! Handlers for the selection of the current target.

use axum::{Json, extract::State};

use crate::api::dto::selection::{SelectionResponse, ToggleAllRequest, ToggleChildRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current target and the charts of its selection.
///
/// # Endpoint
///
/// `GET /api/selection`
///
/// # Errors
///
/// Returns 409 Conflict if no target is selected.
pub async fn selection_handler(
    State(state): State<AppState>,
) -> Result<Json<SelectionResponse>, AppError> {
    let view = state.dashboard.current_view().await?;
    Ok(Json(view.into()))
}

/// Selects or deselects the current target together with all its short URLs.
///
/// # Endpoint
///
/// `PUT /api/selection/all`
pub async fn toggle_all_handler(
    State(state): State<AppState>,
    Json(payload): Json<ToggleAllRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let view = state.dashboard.toggle_all(payload.selected).await?;
    Ok(Json(view.into()))
}

/// Selects or deselects one short URL of the current target.
///
/// Deselecting a short URL also deselects the target.
///
/// # Endpoint
///
/// `PUT /api/selection/children`
///
/// # Errors
///
/// - 404 Not Found if `url` is not a short URL of the current target
/// - 409 Conflict if no target is selected
pub async fn toggle_child_handler(
    State(state): State<AppState>,
    Json(payload): Json<ToggleChildRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let view = state
        .dashboard
        .toggle_child(&payload.url, payload.selected)
        .await?;
    Ok(Json(view.into()))
}

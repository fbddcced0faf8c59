//! Handler for chart data.

use axum::{Json, extract::State};

use crate::api::dto::charts::ChartsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the time and user-agent charts of the current selection.
///
/// # Endpoint
///
/// `GET /api/charts`
///
/// # Errors
///
/// Returns 409 Conflict if no target is selected.
pub async fn charts_handler(
    State(state): State<AppState>,
) -> Result<Json<ChartsResponse>, AppError> {
    let charts = state.dashboard.current_charts().await?;
    Ok(Json(charts.into()))
}

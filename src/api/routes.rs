//! API route configuration.

use crate::api::handlers::{
    charts_handler, list_targets_handler, refresh_targets_handler, reload_statistics_handler,
    select_target_handler, selection_handler, toggle_all_handler, toggle_child_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// All dashboard API routes.
///
/// # Endpoints
///
/// - `GET  /targets`             - List known target URLs
/// - `POST /targets/refresh`     - Reload the target list from the upstream
/// - `POST /targets/select`      - Navigate to a target and load its statistics
/// - `POST /targets/reload`      - Reload statistics of the current target
/// - `GET  /selection`           - Current target, flags and charts
/// - `PUT  /selection/all`       - Select or deselect everything
/// - `PUT  /selection/children`  - Select or deselect one short URL
/// - `GET  /charts`              - Charts of the current selection
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/targets", get(list_targets_handler))
        .route("/targets/refresh", post(refresh_targets_handler))
        .route("/targets/select", post(select_target_handler))
        .route("/targets/reload", post(reload_statistics_handler))
        .route("/selection", get(selection_handler))
        .route("/selection/all", put(toggle_all_handler))
        .route("/selection/children", put(toggle_child_handler))
        .route("/charts", get(charts_handler))
}

//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Upstream reachable
/// - **503 Service Unavailable**: Upstream unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "upstream": { "status": "ok", "message": "Upstream reachable" },
///     "targets": { "status": "ok", "message": "3 target URLs known" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let upstream_check = check_upstream(&state).await;

    let targets_check = check_targets(&state).await;

    let healthy = upstream_check.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            upstream: upstream_check,
            targets: targets_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_upstream(state: &AppState) -> CheckStatus {
    if state.dashboard.source_healthy().await {
        CheckStatus::ok("Upstream reachable")
    } else {
        CheckStatus::error("Upstream unreachable")
    }
}

async fn check_targets(state: &AppState) -> CheckStatus {
    let count = state.dashboard.list_targets().await.len();
    CheckStatus::ok(format!("{} target URLs known", count))
}

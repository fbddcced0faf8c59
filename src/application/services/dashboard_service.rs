//! Target list, navigation and statistics loading for the dashboard.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::RwLock;

use super::metrics_processor::build_charts;
use super::selection;
use crate::domain::entities::{Charts, TargetMetrics, TargetUrl, UrlEntity};
use crate::domain::repositories::MetricsSource;
use crate::error::AppError;

/// Snapshot of the current target, its flags and its charts.
#[derive(Debug, Clone)]
pub struct SelectionView {
    pub target: TargetUrl,
    pub charts: Charts,
}

#[derive(Default)]
struct DashboardState {
    targets: Vec<TargetUrl>,
    current: Option<String>,
}

impl DashboardState {
    fn target(&self, identifier: &str) -> Result<&TargetUrl, AppError> {
        self.targets
            .iter()
            .find(|t| t.identifier() == identifier)
            .ok_or_else(|| AppError::not_found("Target URL not found", json!({ "url": identifier })))
    }

    fn current(&self) -> Result<&TargetUrl, AppError> {
        let identifier = self
            .current
            .as_deref()
            .ok_or_else(|| AppError::conflict("No target URL selected", json!({})))?;
        self.target(identifier)
    }

    fn target_mut(&mut self, identifier: &str) -> Result<&mut TargetUrl, AppError> {
        self.targets
            .iter_mut()
            .find(|t| t.identifier() == identifier)
            .ok_or_else(|| AppError::not_found("Target URL not found", json!({ "url": identifier })))
    }

    fn current_mut(&mut self) -> Result<&mut TargetUrl, AppError> {
        let identifier = self
            .current
            .clone()
            .ok_or_else(|| AppError::conflict("No target URL selected", json!({})))?;
        self.target_mut(&identifier)
    }
}

/// Service holding the dashboard state between requests.
///
/// The state lock is never held while a request to the source is pending.
/// Two loads for the same target may therefore overlap; each one stores its
/// result when it completes, so the last one to complete wins.
pub struct DashboardService {
    source: Arc<dyn MetricsSource>,
    state: RwLock<DashboardState>,
}

impl DashboardService {
    /// Creates a service with an empty target list.
    pub fn new(source: Arc<dyn MetricsSource>) -> Self {
        Self {
            source,
            state: RwLock::new(DashboardState::default()),
        }
    }

    /// Reloads the target list from the source.
    ///
    /// Every target is rebuilt, so short URL colors may change and loaded
    /// snapshots are dropped. The current target is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the source fails; the previous list
    /// is kept.
    pub async fn refresh_url_list(&self) -> Result<Vec<TargetUrl>, AppError> {
        let entries = self.source.fetch_url_list().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to load URL list");
        })?;

        let targets: Vec<TargetUrl> = entries
            .into_iter()
            .map(|(target, children)| TargetUrl::new(target, children))
            .collect();

        tracing::info!(targets = targets.len(), "URL list loaded");

        let mut state = self.state.write().await;
        state.targets = targets.clone();
        state.current = None;

        Ok(targets)
    }

    /// Returns the known targets.
    pub async fn list_targets(&self) -> Vec<TargetUrl> {
        self.state.read().await.targets.clone()
    }

    /// Navigates to `identifier`.
    ///
    /// Loads the statistics of the target and, once the load completes,
    /// selects the target alone and makes it current. Flags are not touched
    /// while the load is pending.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the target is unknown
    /// - [`AppError::Upstream`] if the load fails; flags, snapshots and the
    ///   current target are left as they were
    pub async fn select_target(&self, identifier: &str) -> Result<SelectionView, AppError> {
        self.state.read().await.target(identifier)?;

        let metrics = self.fetch(identifier).await?;

        let mut state = self.state.write().await;
        let target = state.target_mut(identifier)?;
        target.apply_metrics(metrics);
        let charts = selection::activate(target);
        let view = SelectionView {
            target: target.clone(),
            charts,
        };
        state.current = Some(identifier.to_string());

        Ok(view)
    }

    /// Reloads the statistics of the current target without touching flags.
    ///
    /// # Errors
    ///
    /// - [`AppError::Conflict`] if no target is current
    /// - [`AppError::Upstream`] if the load fails
    pub async fn reload_statistics(&self) -> Result<SelectionView, AppError> {
        let identifier = self
            .state
            .read()
            .await
            .current
            .clone()
            .ok_or_else(|| AppError::conflict("No target URL selected", json!({})))?;

        let metrics = self.fetch(&identifier).await?;

        let mut state = self.state.write().await;
        let target = state.target_mut(&identifier)?;
        target.apply_metrics(metrics);

        Ok(SelectionView {
            charts: build_charts(target),
            target: target.clone(),
        })
    }

    /// Selects or deselects a short URL of the current target.
    ///
    /// # Errors
    ///
    /// - [`AppError::Conflict`] if no target is current
    /// - [`AppError::NotFound`] if the short URL is not a child of it
    pub async fn toggle_child(&self, child: &str, selected: bool) -> Result<SelectionView, AppError> {
        let mut state = self.state.write().await;
        let target = state.current_mut()?;
        let charts = selection::toggle_child(target, child, selected)?;

        Ok(SelectionView {
            target: target.clone(),
            charts,
        })
    }

    /// Selects or deselects the current target and all its short URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if no target is current.
    pub async fn toggle_all(&self, selected: bool) -> Result<SelectionView, AppError> {
        let mut state = self.state.write().await;
        let target = state.current_mut()?;
        let charts = selection::toggle_all(target, selected);

        Ok(SelectionView {
            target: target.clone(),
            charts,
        })
    }

    /// Returns the current target with freshly computed charts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if no target is current.
    pub async fn current_view(&self) -> Result<SelectionView, AppError> {
        let state = self.state.read().await;
        let target = state.current()?;

        Ok(SelectionView {
            charts: build_charts(target),
            target: target.clone(),
        })
    }

    /// Returns the charts of the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if no target is current.
    pub async fn current_charts(&self) -> Result<Charts, AppError> {
        Ok(self.current_view().await?.charts)
    }

    /// Checks that the source is reachable.
    pub async fn source_healthy(&self) -> bool {
        self.source.health_check().await
    }

    async fn fetch(&self, identifier: &str) -> Result<TargetMetrics, AppError> {
        match self.source.fetch_metrics(identifier).await {
            Ok(metrics) => {
                tracing::info!(target_url = identifier, "Statistics loaded");
                Ok(metrics)
            }
            Err(e) => {
                tracing::warn!(target_url = identifier, error = %e, "Failed to load statistics");
                Err(e.into())
            }
        }
    }
}

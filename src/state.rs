use std::sync::Arc;

use crate::application::services::DashboardService;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardService>,
}

impl AppState {
    pub fn new(dashboard: DashboardService) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}

//! Business logic services for the application layer.

pub mod dashboard_service;
pub mod metrics_processor;
pub mod selection;

pub use dashboard_service::{DashboardService, SelectionView};

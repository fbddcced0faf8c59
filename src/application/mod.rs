//! Application layer services implementing the dashboard logic.
//!
//! This layer turns loaded snapshots into charts and applies selection
//! changes. Services consume the [`crate::domain::repositories::MetricsSource`]
//! trait and provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::metrics_processor`] - Pure chart dataset builders
//! - [`services::selection`] - Selection cascade between a target and its children
//! - [`services::dashboard_service::DashboardService`] - Target list, navigation and loads

pub mod services;

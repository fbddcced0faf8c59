//! Domain layer containing the URL hierarchy, snapshots and chart data.
//!
//! # Architecture
//!
//! - [`entities`] - Target/short URLs, metric snapshots, chart datasets
//! - [`repositories`] - The [`repositories::MetricsSource`] trait
//! - [`color`] - Fixed platform colors and the random color sequence
//!
//! # Data Flow
//!
//! 1. A [`repositories::MetricsSource`] lists targets and loads their snapshots
//! 2. [`entities::TargetUrl::apply_metrics`] stores them on the hierarchy
//! 3. Selection changes (see [`crate::application::services::selection`])
//!    recompute charts with [`crate::application::services::metrics_processor`]

pub mod color;
pub mod entities;
pub mod repositories;

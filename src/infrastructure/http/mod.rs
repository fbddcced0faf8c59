//! HTTP access to the upstream shortener.
//!
//! - [`HttpMetricsSource`] - `reqwest` implementation of
//!   [`crate::domain::repositories::MetricsSource`]
//! - [`wire`] - JSON shapes of the upstream endpoints

mod metrics_client;
pub mod wire;

pub use metrics_client::{HttpMetricsSource, UpstreamSettings};

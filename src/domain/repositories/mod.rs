//! Data source trait definitions for the domain layer.
//!
//! The dashboard never talks to the network directly. It consumes the
//! [`MetricsSource`] trait, implemented by `crate::infrastructure::http`.
//! Mock implementations are generated via `mockall` for unit tests.

pub mod metrics_source;

pub use crate::error::FetchError;
pub use metrics_source::{MetricsSource, UrlListEntry};

#[cfg(test)]
pub use metrics_source::MockMetricsSource;

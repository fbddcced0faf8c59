//! Source of URL lists and metric snapshots.

use crate::domain::entities::TargetMetrics;
use crate::error::FetchError;
use async_trait::async_trait;

/// One entry of the URL list: a target identifier and its short URLs.
pub type UrlListEntry = (String, Vec<String>);

/// Interface to the shortener that owns the raw statistics.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpMetricsSource`] - upstream HTTP API
/// - Test mocks available with `cfg(test)`
///
/// Calls are independent: there is no caching, de-duplication or
/// cancellation. Two overlapping calls for the same target both resolve.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Lists every target URL with its short URLs, in upstream order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request fails or the body is not the
    /// expected JSON.
    async fn fetch_url_list(&self) -> Result<Vec<UrlListEntry>, FetchError>;

    /// Loads the statistics of a target URL and of each of its short URLs.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request fails or the body is not the
    /// expected JSON.
    async fn fetch_metrics(&self, target: &str) -> Result<TargetMetrics, FetchError>;

    /// Checks that the source answers at all.
    async fn health_check(&self) -> bool;
}

//! `reqwest` client for the upstream shortener API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::wire::{MetricsRequest, MetricsResponse};
use crate::domain::entities::TargetMetrics;
use crate::domain::repositories::{FetchError, MetricsSource, UrlListEntry};

/// Endpoints and timeout of the upstream API.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub url_list_path: String,
    pub metrics_path: String,
    pub timeout: Duration,
}

/// [`MetricsSource`] backed by the shortener's HTTP API.
///
/// Every call issues a new request. Responses are accepted only when the
/// status is a success and the `content-type` announces JSON.
#[derive(Debug, Clone)]
pub struct HttpMetricsSource {
    http_client: reqwest::Client,
    url_list_url: Url,
    metrics_url: Url,
}

impl HttpMetricsSource {
    /// Creates a client for the upstream described by `settings`.
    ///
    /// Endpoint paths are resolved relative to the base URL, so a base of
    /// `http://host/shortener` reaches `http://host/shortener/api/v2/url_list`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the base URL or a path is invalid
    /// or the HTTP client cannot be built.
    pub fn new(settings: &UpstreamSettings) -> Result<Self, FetchError> {
        let mut base = Url::parse(&settings.base_url)
            .map_err(|e| FetchError::Transport(format!("invalid upstream URL: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let join = |path: &str| {
            base.join(path)
                .map_err(|e| FetchError::Transport(format!("invalid path '{path}': {e}")))
        };

        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            url_list_url: join(&settings.url_list_path)?,
            metrics_url: join(&settings.metrics_path)?,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        if !content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
        {
            return Err(FetchError::NotJson { content_type });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl MetricsSource for HttpMetricsSource {
    async fn fetch_url_list(&self) -> Result<Vec<UrlListEntry>, FetchError> {
        debug!(url = %self.url_list_url, "Fetching URL list");

        let response = self
            .http_client
            .get(self.url_list_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn fetch_metrics(&self, target: &str) -> Result<TargetMetrics, FetchError> {
        debug!(url = %self.metrics_url, target_url = target, "Fetching metrics");

        let response = self
            .http_client
            .post(self.metrics_url.clone())
            .header(ACCEPT, "application/json")
            .json(&MetricsRequest { url: target })
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let body: MetricsResponse = Self::read_json(response).await?;
        body.into_domain()
    }

    async fn health_check(&self) -> bool {
        match self.fetch_url_list().await {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Upstream health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> UpstreamSettings {
        UpstreamSettings {
            base_url: base_url.to_string(),
            url_list_path: "api/v2/url_list".to_string(),
            metrics_path: "api/v2/metrics".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_endpoints_are_joined_to_base() {
        let source = HttpMetricsSource::new(&settings("http://stats.local:5000")).unwrap();

        assert_eq!(
            source.url_list_url.as_str(),
            "http://stats.local:5000/api/v2/url_list"
        );
        assert_eq!(
            source.metrics_url.as_str(),
            "http://stats.local:5000/api/v2/metrics"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        for base in ["http://host/shortener", "http://host/shortener/"] {
            let source = HttpMetricsSource::new(&settings(base)).unwrap();

            assert_eq!(
                source.url_list_url.as_str(),
                "http://host/shortener/api/v2/url_list"
            );
            assert_eq!(
                source.metrics_url.as_str(),
                "http://host/shortener/api/v2/metrics"
            );
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpMetricsSource::new(&settings("not a url"));
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}

//! DTOs for the target list endpoints.

use serde::Serialize;

use crate::domain::entities::{MetricSnapshot, ShortUrl, TargetUrl, UrlEntity};

/// A target URL with its short URLs and selection flags.
#[derive(Debug, Serialize)]
pub struct TargetDto {
    pub url: String,
    pub selected: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSummary>,

    pub children: Vec<ShortUrlDto>,
}

#[derive(Debug, Serialize)]
pub struct ShortUrlDto {
    pub url: String,
    pub color: String,
    pub selected: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSummary>,
}

/// Headline figures of a loaded snapshot.
#[derive(Debug, Serialize)]
pub struct MetricsSummary {
    pub start: String,
    pub end: String,
    pub total: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_day: Option<f64>,
}

/// Response of `GET /api/targets` and `POST /api/targets/refresh`.
#[derive(Debug, Serialize)]
pub struct TargetListResponse {
    pub total: usize,
    pub items: Vec<TargetDto>,
}

impl From<&MetricSnapshot> for MetricsSummary {
    fn from(snapshot: &MetricSnapshot) -> Self {
        Self {
            start: snapshot.period.start.format("%Y-%m-%d").to_string(),
            end: snapshot.period.end.format("%Y-%m-%d").to_string(),
            total: snapshot.total,
            per_day: snapshot.per_day,
        }
    }
}

impl From<&ShortUrl> for ShortUrlDto {
    fn from(short: &ShortUrl) -> Self {
        Self {
            url: short.identifier().to_string(),
            color: short.color().to_string(),
            selected: short.is_selected(),
            metrics: short.metrics().map(Into::into),
        }
    }
}

impl From<&TargetUrl> for TargetDto {
    fn from(target: &TargetUrl) -> Self {
        Self {
            url: target.identifier().to_string(),
            selected: target.is_selected(),
            metrics: target.metrics().map(Into::into),
            children: target.children().iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<TargetUrl>> for TargetListResponse {
    fn from(targets: Vec<TargetUrl>) -> Self {
        Self {
            total: targets.len(),
            items: targets.iter().map(Into::into).collect(),
        }
    }
}

//! JSON shapes of the upstream shortener API.
//!
//! The upstream names its fields with dashes (`user-agent`, `per-day`) and
//! sends dates as ISO-8601 strings; [`MetricsResponse::into_domain`] turns
//! them into typed snapshots.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::domain::entities::{ChildMetrics, DayMetrics, MetricSnapshot, Period, TargetMetrics};
use crate::error::FetchError;

/// Body sent to the metrics endpoint.
#[derive(Debug, serde::Serialize)]
pub struct MetricsRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct PeriodDto {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct DayDto {
    pub total: u64,
    #[serde(rename = "user-agent", default)]
    pub user_agent: IndexMap<String, u64>,
}

/// Statistics of a single URL as sent by the upstream.
#[derive(Debug, Deserialize)]
pub struct UrlMetricsDto {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(rename = "per-day", default)]
    pub per_day: Option<f64>,
    #[serde(default)]
    pub date: HashMap<String, DayDto>,
    #[serde(rename = "user-agent", default)]
    pub user_agent: IndexMap<String, u64>,
}

#[derive(Debug, Deserialize)]
pub struct ShortMetricsDto {
    pub url: String,
    #[serde(flatten)]
    pub metrics: UrlMetricsDto,
}

/// Response of the metrics endpoint for a target URL.
#[derive(Debug, Deserialize)]
pub struct MetricsResponse {
    pub period: PeriodDto,
    #[serde(flatten)]
    pub metrics: UrlMetricsDto,
    #[serde(default)]
    pub short: Vec<ShortMetricsDto>,
}

impl MetricsResponse {
    /// Converts the response into domain snapshots.
    ///
    /// Short URL snapshots share the period of the target.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Malformed`] if a date cannot be parsed.
    pub fn into_domain(self) -> Result<TargetMetrics, FetchError> {
        let period = Period::new(parse_date(&self.period.start)?, parse_date(&self.period.end)?);

        let snapshot = self.metrics.into_snapshot(period)?;
        let children = self
            .short
            .into_iter()
            .map(|short| {
                Ok(ChildMetrics {
                    identifier: short.url,
                    snapshot: short.metrics.into_snapshot(period)?,
                })
            })
            .collect::<Result<Vec<_>, FetchError>>()?;

        Ok(TargetMetrics { snapshot, children })
    }
}

impl UrlMetricsDto {
    fn into_snapshot(self, period: Period) -> Result<MetricSnapshot, FetchError> {
        let by_day = self
            .date
            .into_iter()
            .map(|(day, metrics)| {
                Ok((
                    parse_date(&day)?,
                    DayMetrics {
                        total: metrics.total,
                        user_agent: metrics.user_agent,
                    },
                ))
            })
            .collect::<Result<BTreeMap<_, _>, FetchError>>()?;

        let total = self
            .total
            .unwrap_or_else(|| by_day.values().map(|d| d.total).sum());

        Ok(MetricSnapshot {
            period,
            total,
            per_day: self.per_day,
            by_day,
            by_user_agent: self.user_agent,
        })
    }
}

/// Parses an ISO-8601 date, or the date part of an RFC 3339 timestamp.
fn parse_date(value: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|e| FetchError::Malformed(format!("invalid date '{value}': {e}")))
}

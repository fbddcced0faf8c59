#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use indexmap::IndexMap;
use url_shortener_stats::application::services::DashboardService;
use url_shortener_stats::domain::entities::{
    ChildMetrics, DayMetrics, MetricSnapshot, Period, TargetMetrics,
};
use url_shortener_stats::domain::repositories::{FetchError, MetricsSource, UrlListEntry};
use url_shortener_stats::state::AppState;

pub const TARGET: &str = "https://example.com";
pub const OTHER_TARGET: &str = "https://example.org";

/// In-memory source serving a fixed URL list and fixed metrics.
#[derive(Default)]
pub struct StaticSource {
    pub url_list: Vec<UrlListEntry>,
    pub metrics: HashMap<String, TargetMetrics>,
    failing: AtomicBool,
}

impl StaticSource {
    /// Makes every subsequent call fail with HTTP 500.
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), FetchError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(FetchError::HttpStatus { status: 500 })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MetricsSource for StaticSource {
    async fn fetch_url_list(&self) -> Result<Vec<UrlListEntry>, FetchError> {
        self.check()?;
        Ok(self.url_list.clone())
    }

    async fn fetch_metrics(&self, target: &str) -> Result<TargetMetrics, FetchError> {
        self.check()?;
        self.metrics
            .get(target)
            .cloned()
            .ok_or(FetchError::HttpStatus { status: 404 })
    }

    async fn health_check(&self) -> bool {
        self.check().is_ok()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn snapshot(period: Period, days: &[(NaiveDate, u64)], agents: &[(&str, u64)]) -> MetricSnapshot {
    MetricSnapshot {
        period,
        total: days.iter().map(|(_, n)| n).sum(),
        per_day: None,
        by_day: days
            .iter()
            .map(|(day, n)| (*day, DayMetrics::with_total(*n)))
            .collect::<BTreeMap<_, _>>(),
        by_user_agent: agents
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<IndexMap<_, _>>(),
    }
}

/// Source with two targets; [`TARGET`] has short URLs `ex1` and `ex2`.
///
/// Over 2020-01-01..=2020-01-03, `ex1` has 7 visits on the 2nd from linux,
/// `ex2` has 2 visits on the 3rd from windows.
pub fn sample_source() -> StaticSource {
    let period = Period::new(date(2020, 1, 1), date(2020, 1, 3));

    let metrics = TargetMetrics {
        snapshot: snapshot(
            period,
            &[(date(2020, 1, 2), 7), (date(2020, 1, 3), 2)],
            &[("linux", 7), ("windows", 2)],
        ),
        children: vec![
            ChildMetrics {
                identifier: "ex1".to_string(),
                snapshot: snapshot(period, &[(date(2020, 1, 2), 7)], &[("linux", 7)]),
            },
            ChildMetrics {
                identifier: "ex2".to_string(),
                snapshot: snapshot(period, &[(date(2020, 1, 3), 2)], &[("windows", 2)]),
            },
        ],
    };

    StaticSource {
        url_list: vec![
            (
                TARGET.to_string(),
                vec!["ex1".to_string(), "ex2".to_string()],
            ),
            (OTHER_TARGET.to_string(), vec![]),
        ],
        metrics: HashMap::from([(TARGET.to_string(), metrics)]),
        failing: AtomicBool::new(false),
    }
}

/// State backed by `source`, with the URL list already loaded.
pub async fn create_test_state(source: Arc<StaticSource>) -> AppState {
    let dashboard = DashboardService::new(source);
    dashboard.refresh_url_list().await.unwrap();
    AppState::new(dashboard)
}

/// API routes mounted under `/api`, without the outer middleware.
pub fn api_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .nest("/api", url_shortener_stats::api::routes::api_routes())
        .with_state(state)
}

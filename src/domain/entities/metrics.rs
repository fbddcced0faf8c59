//! Metric snapshots loaded from the shortener's metrics endpoint.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;

/// Inclusive range of calendar days covered by a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Every calendar day from `start` to `end`, both included.
    ///
    /// Empty when `start` is after `end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |day| *day <= self.end)
    }

    /// Number of days yielded by [`Period::days`].
    pub fn len_days(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }
}

/// Visits recorded on a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayMetrics {
    pub total: u64,
    pub user_agent: IndexMap<String, u64>,
}

impl DayMetrics {
    pub fn with_total(total: u64) -> Self {
        Self {
            total,
            user_agent: IndexMap::new(),
        }
    }
}

/// A complete set of statistics for one URL.
///
/// Only days with at least one visit appear in `by_day`. `by_user_agent`
/// keeps the order in which the upstream listed its categories.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSnapshot {
    pub period: Period,
    pub total: u64,
    pub per_day: Option<f64>,
    pub by_day: BTreeMap<NaiveDate, DayMetrics>,
    pub by_user_agent: IndexMap<String, u64>,
}

impl MetricSnapshot {
    /// Creates an empty snapshot for `period`.
    pub fn new(period: Period) -> Self {
        Self {
            period,
            total: 0,
            per_day: None,
            by_day: BTreeMap::new(),
            by_user_agent: IndexMap::new(),
        }
    }

    /// Visit total for `day`, zero when the day is absent.
    pub fn total_on(&self, day: NaiveDate) -> u64 {
        self.by_day.get(&day).map_or(0, |metrics| metrics.total)
    }

    /// Visit count for a user-agent category, zero when absent.
    pub fn user_agent_count(&self, category: &str) -> u64 {
        self.by_user_agent.get(category).copied().unwrap_or(0)
    }
}

/// Statistics of one short URL as returned alongside its target.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildMetrics {
    pub identifier: String,
    pub snapshot: MetricSnapshot,
}

/// Result of a metrics load for a target URL.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetMetrics {
    pub snapshot: MetricSnapshot,
    pub children: Vec<ChildMetrics>,
}

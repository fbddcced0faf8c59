//! Core domain entities of the statistics dashboard.
//!
//! # Entity Types
//!
//! - [`TargetUrl`] / [`ShortUrl`] - the two-level URL hierarchy with selection flags
//! - [`MetricSnapshot`] - period, daily totals and user-agent counts of one URL
//! - [`TimeChart`] / [`UserAgentChart`] - chart datasets computed from the selection

pub mod chart;
pub mod metrics;
pub mod url;

pub use chart::{Charts, SeriesStyle, TimeChart, TimeDataset, UserAgentChart, UserAgentDataset};
pub use metrics::{ChildMetrics, DayMetrics, MetricSnapshot, Period, TargetMetrics};
pub use url::{ShortUrl, TargetUrl, UrlEntity, UrlKind, UrlState};

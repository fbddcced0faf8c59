//! Chart datasets handed to the rendering boundary.
//!
//! Every dataset carries exactly one value per label, in label order.

/// Name of the stack shared by the short URL bars of the time chart.
pub const SHORT_STACK: &str = "short";

/// Label of the aggregate series of a target URL.
pub const TOTAL_LABEL: &str = "total";

/// Visits per category, one dataset per selected URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAgentChart {
    pub labels: Vec<String>,
    pub datasets: Vec<UserAgentDataset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserAgentDataset {
    pub label: String,
    pub data: Vec<u64>,
    /// One fill color per label, shared by all datasets of a chart.
    pub background_color: Vec<String>,
    pub border_color: String,
    pub border_width: u32,
}

/// How a time series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Unfilled line, used for the target total.
    Line,
    /// Bar stacked with the other series sharing `stack`.
    StackedBar { stack: &'static str },
}

/// Visits per day, one label per calendar day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeChart {
    pub labels: Vec<String>,
    pub datasets: Vec<TimeDataset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeDataset {
    pub label: String,
    pub style: SeriesStyle,
    pub color: String,
    pub data: Vec<u64>,
}

/// Both charts of the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Charts {
    pub time: TimeChart,
    pub user_agent: UserAgentChart,
}

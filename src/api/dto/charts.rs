//! Chart.js-shaped chart payloads.
//!
//! Field names follow Chart.js dataset options so the payload can be handed
//! to a chart unchanged.

use serde::Serialize;

use crate::domain::entities::{
    Charts, SeriesStyle, TimeChart, TimeDataset, UserAgentChart, UserAgentDataset,
};

const TRANSPARENT: &str = "rgba(0,0,0,0)";
const BAR_PERCENTAGE: f32 = 0.3;

/// Both charts of the current selection.
///
/// # Example
///
/// ```json
/// {
///   "time": {
///     "labels": ["2020-01-01", "2020-01-02"],
///     "datasets": [
///       { "type": "line", "label": "total", "lineTension": 0.0,
///         "borderColor": "#444444", "backgroundColor": "rgba(0,0,0,0)", "data": [0, 7] },
///       { "stack": "short", "label": "ex1", "barPercentage": 0.3,
///         "backgroundColor": "#0000ff", "data": [0, 7] }
///     ]
///   },
///   "user_agent": {
///     "labels": ["linux"],
///     "datasets": [
///       { "label": "https://example.com", "data": [7], "backgroundColor": ["#ffc500"],
///         "borderColor": "#000000", "borderWidth": 1 }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub time: TimeChartDto,
    pub user_agent: UserAgentChartDto,
}

#[derive(Debug, Serialize)]
pub struct TimeChartDto {
    pub labels: Vec<String>,
    pub datasets: Vec<TimeDatasetDto>,
}

/// A time dataset, drawn either as the total line or as a stacked bar.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TimeDatasetDto {
    Line(LineDatasetDto),
    Bar(BarDatasetDto),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDatasetDto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub label: String,
    pub line_tension: f32,
    pub border_color: String,
    pub background_color: &'static str,
    pub data: Vec<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDatasetDto {
    pub stack: &'static str,
    pub label: String,
    pub bar_percentage: f32,
    pub background_color: String,
    pub data: Vec<u64>,
}

#[derive(Debug, Serialize)]
pub struct UserAgentChartDto {
    pub labels: Vec<String>,
    pub datasets: Vec<UserAgentDatasetDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAgentDatasetDto {
    pub label: String,
    pub data: Vec<u64>,
    pub background_color: Vec<String>,
    pub border_color: String,
    pub border_width: u32,
}

impl From<Charts> for ChartsResponse {
    fn from(charts: Charts) -> Self {
        Self {
            time: charts.time.into(),
            user_agent: charts.user_agent.into(),
        }
    }
}

impl From<TimeChart> for TimeChartDto {
    fn from(chart: TimeChart) -> Self {
        Self {
            labels: chart.labels,
            datasets: chart.datasets.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TimeDataset> for TimeDatasetDto {
    fn from(dataset: TimeDataset) -> Self {
        match dataset.style {
            SeriesStyle::Line => Self::Line(LineDatasetDto {
                kind: "line",
                label: dataset.label,
                line_tension: 0.0,
                border_color: dataset.color,
                background_color: TRANSPARENT,
                data: dataset.data,
            }),
            SeriesStyle::StackedBar { stack } => Self::Bar(BarDatasetDto {
                stack,
                label: dataset.label,
                bar_percentage: BAR_PERCENTAGE,
                background_color: dataset.color,
                data: dataset.data,
            }),
        }
    }
}

impl From<UserAgentChart> for UserAgentChartDto {
    fn from(chart: UserAgentChart) -> Self {
        Self {
            labels: chart.labels,
            datasets: chart
                .datasets
                .into_iter()
                .map(|d: UserAgentDataset| UserAgentDatasetDto {
                    label: d.label,
                    data: d.data,
                    background_color: d.background_color,
                    border_color: d.border_color,
                    border_width: d.border_width,
                })
                .collect(),
        }
    }
}

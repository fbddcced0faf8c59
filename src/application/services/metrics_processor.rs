//! Transformation of URL snapshots into chart datasets.
//!
//! Both builders are pure: the same inputs always give the same labels and
//! counts. Only the colors of categories without a [`platform_color`] may
//! change between calls, because each call draws them from a new
//! [`ColorSequence`].

use chrono::NaiveDate;

use crate::domain::color::{ColorSequence, TOTAL_COLOR, platform_color};
use crate::domain::entities::{
    Charts, Period, SeriesStyle, ShortUrl, TargetUrl, TimeChart, TimeDataset, UrlEntity, UrlKind,
    UserAgentChart, UserAgentDataset,
    chart::{SHORT_STACK, TOTAL_LABEL},
};

const BORDER_COLOR: &str = "#000000";

/// Builds the user-agent chart of the selected URLs.
///
/// `target` is `Some` only when the target itself is selected;
/// `selected_children` are its selected short URLs in their original order.
///
/// Labels are the union of the categories of every URL, in first-seen
/// order. Each URL gets one dataset whose counts follow the labels, with
/// zero for categories it never saw. The fill colors are computed once and
/// shared by all datasets. The target dataset is the only one with a border.
pub fn build_user_agent_chart(
    target: Option<&TargetUrl>,
    selected_children: &[&ShortUrl],
) -> UserAgentChart {
    let entities: Vec<&dyn UrlEntity> = target
        .map(|t| t as &dyn UrlEntity)
        .into_iter()
        .chain(selected_children.iter().map(|c| *c as &dyn UrlEntity))
        .collect();

    let mut labels: Vec<String> = Vec::new();
    for entity in &entities {
        let Some(metrics) = entity.metrics() else {
            continue;
        };
        for category in metrics.by_user_agent.keys() {
            if !labels.contains(category) {
                labels.push(category.clone());
            }
        }
    }

    let mut colors = ColorSequence::new();
    let background_color: Vec<String> = labels
        .iter()
        .map(|category| match platform_color(category) {
            Some(color) => color.to_string(),
            None => colors.next_color(),
        })
        .collect();

    let datasets = entities
        .iter()
        .map(|entity| UserAgentDataset {
            label: entity.identifier().to_string(),
            data: labels
                .iter()
                .map(|category| entity.metrics().map_or(0, |m| m.user_agent_count(category)))
                .collect(),
            background_color: background_color.clone(),
            border_color: BORDER_COLOR.to_string(),
            border_width: match entity.kind() {
                UrlKind::Target => 1,
                UrlKind::Short => 0,
            },
        })
        .collect();

    UserAgentChart { labels, datasets }
}

/// Builds the daily visits chart of the selected URLs over `period`.
///
/// Labels are every day of `period` as `YYYY-MM-DD`. A selected target adds
/// a "total" line; each selected child adds a bar in the shared stack, in its
/// own color. Days missing from a snapshot, and URLs without a snapshot,
/// count as zero.
///
/// An empty selection yields an empty chart, without the day labels: the
/// one-label-per-day rule holds only while at least one URL is selected.
pub fn build_time_chart(
    period: &Period,
    target: Option<&TargetUrl>,
    selected_children: &[&ShortUrl],
) -> TimeChart {
    if target.is_none() && selected_children.is_empty() {
        return TimeChart::default();
    }

    let days: Vec<NaiveDate> = period.days().collect();
    let labels = days
        .iter()
        .map(|day| day.format("%Y-%m-%d").to_string())
        .collect();

    let mut datasets = Vec::with_capacity(selected_children.len() + 1);

    if let Some(target) = target {
        datasets.push(TimeDataset {
            label: TOTAL_LABEL.to_string(),
            style: SeriesStyle::Line,
            color: TOTAL_COLOR.to_string(),
            data: daily_totals(&days, target),
        });
    }

    for child in selected_children {
        datasets.push(TimeDataset {
            label: child.identifier().to_string(),
            style: SeriesStyle::StackedBar { stack: SHORT_STACK },
            color: child.color().to_string(),
            data: daily_totals(&days, *child),
        });
    }

    TimeChart { labels, datasets }
}

fn daily_totals(days: &[NaiveDate], entity: &dyn UrlEntity) -> Vec<u64> {
    days.iter()
        .map(|day| entity.metrics().map_or(0, |m| m.total_on(*day)))
        .collect()
}

/// Builds both charts from the selection flags of `target`.
///
/// The period comes from the target snapshot; before the first successful
/// load both charts are empty.
pub fn build_charts(target: &TargetUrl) -> Charts {
    let Some(snapshot) = target.metrics() else {
        return Charts::default();
    };

    let selected_target = target.is_selected().then_some(target);
    let children = target.selected_children();

    tracing::debug!(
        target_url = target.identifier(),
        target_selected = target.is_selected(),
        selected_children = children.len(),
        "Recomputing charts"
    );

    Charts {
        time: build_time_chart(&snapshot.period, selected_target, &children),
        user_agent: build_user_agent_chart(selected_target, &children),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::PALETTE;
    use crate::domain::entities::{ChildMetrics, DayMetrics, MetricSnapshot, TargetMetrics};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period() -> Period {
        Period::new(date(2020, 1, 1), date(2020, 1, 3))
    }

    fn snapshot(user_agents: &[(&str, u64)], days: &[(NaiveDate, u64)]) -> MetricSnapshot {
        let mut snapshot = MetricSnapshot::new(period());
        for (category, count) in user_agents {
            snapshot.by_user_agent.insert(category.to_string(), *count);
        }
        for (day, total) in days {
            snapshot.by_day.insert(*day, DayMetrics::with_total(*total));
        }
        snapshot
    }

    /// Target with children `A` and `B` loaded as in the reference scenario.
    fn scenario_target() -> TargetUrl {
        let mut target = TargetUrl::new("https://example.com", ["A", "B"]);
        target.apply_metrics(TargetMetrics {
            snapshot: snapshot(&[("linux", 1)], &[(date(2020, 1, 1), 1)]),
            children: vec![
                ChildMetrics {
                    identifier: "A".to_string(),
                    snapshot: snapshot(&[("linux", 5), ("android", 2)], &[]),
                },
                ChildMetrics {
                    identifier: "B".to_string(),
                    snapshot: snapshot(&[("windows", 3)], &[(date(2020, 1, 2), 7)]),
                },
            ],
        });
        target
    }

    #[test]
    fn test_user_agent_chart_scenario() {
        let target = scenario_target();
        let children: Vec<&ShortUrl> = target.children().iter().collect();

        let chart = build_user_agent_chart(Some(&target), &children);

        assert_eq!(chart.labels, vec!["linux", "android", "windows"]);
        assert_eq!(chart.datasets.len(), 3);
        assert_eq!(chart.datasets[0].data, vec![1, 0, 0]);
        assert_eq!(chart.datasets[1].data, vec![5, 2, 0]);
        assert_eq!(chart.datasets[2].data, vec![0, 0, 3]);

        let expected: Vec<String> = ["linux", "android", "windows"]
            .iter()
            .map(|c| platform_color(c).unwrap().to_string())
            .collect();
        for dataset in &chart.datasets {
            assert_eq!(dataset.background_color, expected);
        }
    }

    #[test]
    fn test_user_agent_chart_borders_distinguish_target() {
        let target = scenario_target();
        let children: Vec<&ShortUrl> = target.children().iter().collect();

        let chart = build_user_agent_chart(Some(&target), &children);

        assert_eq!(chart.datasets[0].label, "https://example.com");
        assert_eq!(chart.datasets[0].border_width, 1);
        assert_eq!(chart.datasets[1].border_width, 0);
        assert_eq!(chart.datasets[2].border_width, 0);
    }

    #[test]
    fn test_user_agent_chart_without_target() {
        let target = scenario_target();
        let b = target.child("B").unwrap();

        let chart = build_user_agent_chart(None, &[b]);

        assert_eq!(chart.labels, vec!["windows"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].label, "B");
        assert_eq!(chart.datasets[0].data, vec![3]);
    }

    #[test]
    fn test_user_agent_chart_empty_selection() {
        let chart = build_user_agent_chart(None, &[]);

        assert!(chart.labels.is_empty());
        assert!(chart.datasets.is_empty());
    }

    #[test]
    fn test_unknown_categories_use_color_sequence() {
        let mut target = TargetUrl::new("https://example.com", Vec::<String>::new());
        target.apply_metrics(TargetMetrics {
            snapshot: snapshot(
                &[("bot", 1), ("linux", 2), ("tv", 3), ("console", 4)],
                &[],
            ),
            children: vec![],
        });

        let chart = build_user_agent_chart(Some(&target), &[]);
        let colors = &chart.datasets[0].background_color;

        assert_eq!(colors[0], PALETTE[0]);
        assert_eq!(colors[1], platform_color("linux").unwrap());
        assert_eq!(colors[2], PALETTE[1]);
        assert_eq!(colors[3], PALETTE[2]);
    }

    #[test]
    fn test_color_row_shared_across_datasets() {
        let mut target = TargetUrl::new("https://example.com", ["a", "b"]);
        let names: Vec<String> = (0..10).map(|i| format!("agent-{i}")).collect();
        let agents: Vec<(&str, u64)> = names.iter().map(|n| (n.as_str(), 1)).collect();
        target.apply_metrics(TargetMetrics {
            snapshot: snapshot(&agents, &[]),
            children: vec![ChildMetrics {
                identifier: "a".to_string(),
                snapshot: snapshot(&[("linux", 1)], &[]),
            }],
        });
        let children: Vec<&ShortUrl> = target.children().iter().collect();

        let chart = build_user_agent_chart(Some(&target), &children);

        assert_eq!(chart.labels.len(), 11);
        for dataset in &chart.datasets {
            assert_eq!(dataset.data.len(), chart.labels.len());
            assert_eq!(dataset.background_color, chart.datasets[0].background_color);
        }
    }

    #[test]
    fn test_child_without_metrics_gives_zero_series() {
        let target = TargetUrl::new("https://example.com", ["a"]);
        let a = target.child("a").unwrap();

        let ua = build_user_agent_chart(None, &[a]);
        assert!(ua.labels.is_empty());
        assert_eq!(ua.datasets.len(), 1);
        assert!(ua.datasets[0].data.is_empty());

        let time = build_time_chart(&period(), None, &[a]);
        assert_eq!(time.datasets[0].data, vec![0, 0, 0]);
    }

    #[test]
    fn test_time_chart_scenario() {
        let mut target = TargetUrl::new("https://example.com", ["child"]);
        target.apply_metrics(TargetMetrics {
            snapshot: snapshot(&[], &[]),
            children: vec![ChildMetrics {
                identifier: "child".to_string(),
                snapshot: snapshot(&[], &[(date(2020, 1, 2), 7)]),
            }],
        });
        let child = target.child("child").unwrap();

        let chart = build_time_chart(&period(), None, &[child]);

        assert_eq!(chart.labels, vec!["2020-01-01", "2020-01-02", "2020-01-03"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].data, vec![0, 7, 0]);
        assert_eq!(chart.datasets[0].color, child.color());
        assert_eq!(
            chart.datasets[0].style,
            SeriesStyle::StackedBar { stack: "short" }
        );
    }

    #[test]
    fn test_time_chart_total_series_first() {
        let target = scenario_target();
        let children: Vec<&ShortUrl> = target.children().iter().collect();

        let chart = build_time_chart(&period(), Some(&target), &children);

        assert_eq!(chart.datasets.len(), 3);
        assert_eq!(chart.datasets[0].label, "total");
        assert_eq!(chart.datasets[0].style, SeriesStyle::Line);
        assert_eq!(chart.datasets[0].color, TOTAL_COLOR);
        assert_eq!(chart.datasets[0].data, vec![1, 0, 0]);
        assert_eq!(chart.datasets[1].label, "A");
        assert_eq!(chart.datasets[1].data, vec![0, 0, 0]);
        assert_eq!(chart.datasets[2].label, "B");
        assert_eq!(chart.datasets[2].data, vec![0, 7, 0]);
    }

    #[test]
    fn test_time_chart_label_count_matches_period() {
        let periods = [
            (date(2020, 1, 1), date(2020, 1, 1), 1),
            (date(2020, 2, 1), date(2020, 3, 1), 30),
            (date(2019, 12, 11), date(2020, 1, 1), 22),
            (date(2021, 10, 1), date(2021, 11, 30), 61),
        ];

        for (start, end, expected) in periods {
            let period = Period::new(start, end);
            let target = scenario_target();
            let chart = build_time_chart(&period, Some(&target), &[]);

            assert_eq!(chart.labels.len(), expected);
            assert_eq!(chart.labels.len(), period.len_days());
            assert_eq!(chart.datasets[0].data.len(), expected);
        }
    }

    #[test]
    fn test_time_chart_empty_selection() {
        let chart = build_time_chart(&period(), None, &[]);

        assert_eq!(chart, TimeChart::default());
    }

    #[test]
    fn test_build_charts_follows_flags() {
        let mut target = scenario_target();
        target.set_selected(true);
        target.child_mut("B").unwrap().set_selected(true);

        let charts = build_charts(&target);

        assert_eq!(charts.time.datasets.len(), 2);
        assert_eq!(charts.user_agent.labels, vec!["linux", "windows"]);
        assert_eq!(charts.user_agent.datasets[1].data, vec![0, 3]);
    }

    #[test]
    fn test_build_charts_before_load() {
        let mut target = TargetUrl::new("https://example.com", ["a"]);
        target.set_selected(true);

        assert_eq!(build_charts(&target), Charts::default());
    }

    #[test]
    fn test_repeated_builds_give_same_counts() {
        let target = scenario_target();
        let children: Vec<&ShortUrl> = target.children().iter().collect();

        let first = build_user_agent_chart(Some(&target), &children);
        let second = build_user_agent_chart(Some(&target), &children);

        assert_eq!(first, second);
    }
}

//! Target and short URL entities.
//!
//! Both kinds share a [`UrlState`] (identifier, selection flag, metrics) and
//! expose it through the [`UrlEntity`] trait. [`UrlKind`] tells them apart
//! where a chart needs to style the target differently from its children.

use std::collections::HashMap;

use crate::domain::color::ColorSequence;
use crate::domain::entities::metrics::{MetricSnapshot, TargetMetrics};
use crate::domain::repositories::{FetchError, MetricsSource};

/// Discriminant of a URL entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Target,
    Short,
}

/// State common to target and short URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlState {
    identifier: String,
    pub is_selected: bool,
    pub metrics: Option<MetricSnapshot>,
}

impl UrlState {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            is_selected: false,
            metrics: None,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Capability shared by every URL entity.
pub trait UrlEntity {
    fn state(&self) -> &UrlState;

    fn state_mut(&mut self) -> &mut UrlState;

    fn kind(&self) -> UrlKind;

    fn identifier(&self) -> &str {
        self.state().identifier()
    }

    fn is_selected(&self) -> bool {
        self.state().is_selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.state_mut().is_selected = selected;
    }

    fn metrics(&self) -> Option<&MetricSnapshot> {
        self.state().metrics.as_ref()
    }
}

/// A redirect alias of a target URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    state: UrlState,
    color: String,
}

impl ShortUrl {
    /// Creates a short URL colored by the next value of `colors`.
    pub fn new(identifier: impl Into<String>, colors: &mut ColorSequence) -> Self {
        Self {
            state: UrlState::new(identifier),
            color: colors.next_color(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl UrlEntity for ShortUrl {
    fn state(&self) -> &UrlState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut UrlState {
        &mut self.state
    }

    fn kind(&self) -> UrlKind {
        UrlKind::Short
    }
}

/// A canonical long URL and the short URLs redirecting to it.
///
/// Children keep the order given by the upstream. Their colors come from a
/// single sequence created here, so siblings start with distinct palette
/// colors. Building a new `TargetUrl` for the same identifier may color the
/// children differently.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetUrl {
    state: UrlState,
    children: Vec<ShortUrl>,
}

impl TargetUrl {
    pub fn new<I, S>(identifier: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut colors = ColorSequence::new();
        let children = children
            .into_iter()
            .map(|child| ShortUrl::new(child, &mut colors))
            .collect();

        Self {
            state: UrlState::new(identifier),
            children,
        }
    }

    pub fn children(&self) -> &[ShortUrl] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [ShortUrl] {
        &mut self.children
    }

    pub fn child(&self, identifier: &str) -> Option<&ShortUrl> {
        self.children.iter().find(|c| c.identifier() == identifier)
    }

    pub fn child_mut(&mut self, identifier: &str) -> Option<&mut ShortUrl> {
        self.children
            .iter_mut()
            .find(|c| c.identifier() == identifier)
    }

    /// Selected children, in their original order.
    pub fn selected_children(&self) -> Vec<&ShortUrl> {
        self.children.iter().filter(|c| c.is_selected()).collect()
    }

    /// Stores a freshly loaded snapshot on the target and its children.
    ///
    /// Children are matched by exact identifier. A child without an entry in
    /// `metrics` ends up with no snapshot; when the upstream lists the same
    /// child twice, the later entry is kept. Previous snapshots are replaced,
    /// never merged.
    pub fn apply_metrics(&mut self, metrics: TargetMetrics) {
        let TargetMetrics { snapshot, children } = metrics;

        let mut by_identifier: HashMap<String, MetricSnapshot> = children
            .into_iter()
            .map(|child| (child.identifier, child.snapshot))
            .collect();

        for child in &mut self.children {
            child.state.metrics = by_identifier.remove(child.identifier());
        }

        self.state.metrics = Some(snapshot);
    }

    /// Fetches the statistics of this target and stores them.
    ///
    /// Nothing is cached: every call hits `source` and overwrites the
    /// previous snapshots. On failure the existing snapshots are kept.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] reported by `source`.
    pub async fn load_statistics(
        &mut self,
        source: &dyn MetricsSource,
    ) -> Result<&mut Self, FetchError> {
        let metrics = source.fetch_metrics(self.identifier()).await?;
        self.apply_metrics(metrics);
        Ok(self)
    }
}

impl UrlEntity for TargetUrl {
    fn state(&self) -> &UrlState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut UrlState {
        &mut self.state
    }

    fn kind(&self) -> UrlKind {
        UrlKind::Target
    }
}

//! # URL Shortener Stats
//!
//! Statistics dashboard for a URL shortener, built with Axum.
//!
//! Every target URL owns a set of short URLs. The dashboard loads visit
//! statistics for a target and its short URLs from the shortener API, keeps
//! track of which of them are selected, and computes chart datasets (visits
//! per day and visits per user-agent category) for the selection.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL entities, metric snapshots, colors and the source trait
//! - **Application Layer** ([`application`]) - Selection cascade, chart computation, dashboard state
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the shortener API
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export UPSTREAM_URL="http://127.0.0.1:5000"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DashboardService, SelectionView};
    pub use crate::domain::entities::{Charts, ShortUrl, TargetUrl, UrlEntity};
    pub use crate::domain::repositories::{FetchError, MetricsSource, UrlListEntry};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

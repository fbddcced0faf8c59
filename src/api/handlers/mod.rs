//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod charts;
pub mod health;
pub mod selection;
pub mod targets;

pub use charts::charts_handler;
pub use health::health_handler;
pub use selection::{selection_handler, toggle_all_handler, toggle_child_handler};
pub use targets::{
    list_targets_handler, refresh_targets_handler, reload_statistics_handler,
    select_target_handler,
};

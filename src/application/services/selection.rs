//! Selection cascade over a target URL and its short URLs.
//!
//! The only state is the `is_selected` flag of each entity. Every operation
//! that changes flags returns the recomputed [`Charts`].

use serde_json::json;

use super::metrics_processor::build_charts;
use crate::domain::entities::{Charts, TargetUrl, UrlEntity};
use crate::error::AppError;

/// Selects or deselects one short URL.
///
/// Deselecting a child also deselects the target, since the aggregate view
/// no longer covers every short URL. Sibling flags are left alone.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if `target` has no child `child`.
pub fn toggle_child(target: &mut TargetUrl, child: &str, selected: bool) -> Result<Charts, AppError> {
    let short_url = target.child_mut(child).ok_or_else(|| {
        AppError::not_found("Short URL not found", json!({ "url": child }))
    })?;
    short_url.set_selected(selected);

    if !selected {
        target.set_selected(false);
    }

    Ok(build_charts(target))
}

/// Sets the target and every child to `selected`.
pub fn toggle_all(target: &mut TargetUrl, selected: bool) -> Charts {
    set_all(target, selected);
    build_charts(target)
}

/// Clears every flag of `target`. Used when navigating to it.
pub fn reset(target: &mut TargetUrl) {
    set_all(target, false);
}

/// Finishes a navigation once statistics are loaded: only the target is
/// selected.
pub fn activate(target: &mut TargetUrl) -> Charts {
    reset(target);
    target.set_selected(true);
    build_charts(target)
}

fn set_all(target: &mut TargetUrl, selected: bool) {
    target.set_selected(selected);
    for child in target.children_mut() {
        child.set_selected(selected);
    }
}

//! DTOs for navigation and selection endpoints.

use serde::{Deserialize, Serialize};

use super::charts::ChartsResponse;
use super::targets::TargetDto;
use crate::application::services::SelectionView;

/// Request body for `POST /api/targets/select`.
#[derive(Debug, Deserialize)]
pub struct SelectTargetRequest {
    pub url: String,
}

/// Request body for `PUT /api/selection/all`.
#[derive(Debug, Deserialize)]
pub struct ToggleAllRequest {
    pub selected: bool,
}

/// Request body for `PUT /api/selection/children`.
#[derive(Debug, Deserialize)]
pub struct ToggleChildRequest {
    pub url: String,
    pub selected: bool,
}

/// Current target, its flags and the charts of the selection.
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub target: TargetDto,
    pub charts: ChartsResponse,
}

impl From<SelectionView> for SelectionResponse {
    fn from(view: SelectionView) -> Self {
        Self {
            target: TargetDto::from(&view.target),
            charts: view.charts.into(),
        }
    }
}

//! Callback Routes
//!
//! Endpoints the page calls when a selector changes.
//!
//! - GET /api/v1/callbacks/output-panel?area= - Statistics panel fragment
//! - GET /api/v1/callbacks/recycle-chart?area= - Recycling by area figure
//! - GET /api/v1/callbacks/recycle-year?period= - Recycling by year figure

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{AreaQuery, PeriodQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::Plot;

/// GET /api/v1/callbacks/output-panel
///
/// Recompute the area statistics and render the panel.
pub async fn output_panel(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AreaQuery>,
) -> ApiResult<Html<String>> {
    let area = required_area(&params)?;
    let panel = state.dashboard.output_panel(area)?;

    tracing::debug!(area = %area, "Rendered output panel");

    Ok(Html(panel))
}

/// GET /api/v1/callbacks/recycle-chart
///
/// Rebuild the area comparison chart.
pub async fn recycle_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AreaQuery>,
) -> ApiResult<Json<Plot>> {
    let area = required_area(&params)?;
    Ok(Json(state.dashboard.area_figure(area)?))
}

/// GET /api/v1/callbacks/recycle-year
///
/// Rebuild the year chart; the default period is used when none is given.
pub async fn recycle_year(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeriodQuery>,
) -> ApiResult<Json<Plot>> {
    let period = match params.period.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => state.dashboard.default_period(),
    };

    Ok(Json(state.dashboard.year_figure(&period)?))
}

fn required_area(params: &AreaQuery) -> ApiResult<&str> {
    params
        .area
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ApiError::Validation("area is required".to_string()))
}

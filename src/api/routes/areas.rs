//! Area Routes
//!
//! - GET /api/v1/areas - List areas in dataset order
//! - GET /api/v1/periods - List reporting periods
//! - GET /api/v1/areas/:area/summary - Summary statistics for an area

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{AreaListResponse, PeriodListResponse, SummaryResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/areas
pub async fn list_areas(State(state): State<Arc<AppState>>) -> Json<AreaListResponse> {
    let data = state.dashboard.data();
    let areas = data.area_list().to_vec();

    Json(AreaListResponse {
        total: areas.len(),
        areas,
        national_area: data.national_area().to_string(),
        default_area: state.dashboard.default_area().to_string(),
    })
}

/// GET /api/v1/periods
pub async fn list_periods(State(state): State<Arc<AppState>>) -> Json<PeriodListResponse> {
    let data = state.dashboard.data();

    Json(PeriodListResponse {
        periods: data.periods().iter().map(|p| p.to_string()).collect(),
        latest: data.latest_period().to_string(),
        default_period: state.dashboard.default_period(),
    })
}

/// GET /api/v1/areas/:area/summary
pub async fn area_summary(
    State(state): State<Arc<AppState>>,
    Path(area): Path<String>,
) -> ApiResult<Json<SummaryResponse>> {
    let summary = state.dashboard.summary(&area)?;
    let formatted = summary.formatted();

    Ok(Json(SummaryResponse { summary, formatted }))
}

//! Page Route
//!
//! - GET / - Full dashboard page, optionally with `?area=` preselected

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::AreaQuery;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AreaQuery>,
) -> ApiResult<Html<String>> {
    let area = params
        .area
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty());

    Ok(Html(state.dashboard.render_page(area)?))
}

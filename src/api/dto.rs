//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::data::{AreaSummary, FormattedSummary};

// ============================================
// REQUEST DTOs
// ============================================

/// `?area=` query parameter
#[derive(Debug, Default, Deserialize)]
pub struct AreaQuery {
    #[serde(default)]
    pub area: Option<String>,
}

/// `?period=` query parameter
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    #[serde(default)]
    pub period: Option<String>,
}

// ============================================
// RESPONSE DTOs
// ============================================

/// Area list response
#[derive(Debug, Serialize)]
pub struct AreaListResponse {
    pub areas: Vec<String>,
    pub national_area: String,
    pub default_area: String,
    pub total: usize,
}

/// Period list response
#[derive(Debug, Serialize)]
pub struct PeriodListResponse {
    /// Oldest first
    pub periods: Vec<String>,
    pub latest: String,
    pub default_period: String,
}

/// Summary statistics for one area
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: AreaSummary,
    pub formatted: FormattedSummary,
}

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub areas: usize,
    pub periods: usize,
    pub latest_period: String,
    pub uptime_seconds: u64,
    pub version: String,
}

//! Dashboard Composition
//!
//! Ties the dataset and chart builders to the page:
//!
//! - **panel**: Statistics panel component
//! - **layout**: Full page component with selectors, panel and chart tabs
//!
//! Views are leptos components rendered to HTML on the server.
//!
//! [`Dashboard`] owns the shared dataset and answers the two callbacks
//! (statistics panel and area chart) plus the year chart.

pub mod layout;
pub mod panel;

pub use layout::{DashboardPage, PageContent};
pub use panel::{render_output_panel, OutputPanel};

use std::sync::Arc;

use crate::charts::{Plot, RecyclingBarChart, RecyclingChart};
use crate::data::{AreaSummary, DataError, DataResult, RecyclingData};

/// Dashboard backed by an immutable dataset
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: Arc<RecyclingData>,
    area_chart: RecyclingChart,
    year_chart: RecyclingBarChart,
    default_area: String,
    default_period: Option<String>,
}

impl Dashboard {
    /// Create a dashboard selecting `default_area` on first load
    ///
    /// Fails if the default area or default period is not in the dataset.
    pub fn new(
        data: Arc<RecyclingData>,
        default_area: impl Into<String>,
        default_period: Option<String>,
    ) -> DataResult<Self> {
        let default_area = default_area.into();
        if !data.has_area(&default_area) {
            return Err(DataError::AreaNotFound(default_area));
        }
        if let Some(period) = &default_period {
            data.find_period(period)?;
        }

        Ok(Self {
            area_chart: RecyclingChart::new(Arc::clone(&data)),
            year_chart: RecyclingBarChart::new(Arc::clone(&data)),
            data,
            default_area,
            default_period,
        })
    }

    pub fn data(&self) -> &RecyclingData {
        &self.data
    }

    pub fn default_area(&self) -> &str {
        &self.default_area
    }

    /// Period shown in the year chart on first load
    pub fn default_period(&self) -> String {
        self.default_period
            .clone()
            .unwrap_or_else(|| self.data.latest_period().to_string())
    }

    /// Summary statistics for an area
    pub fn summary(&self, area: &str) -> DataResult<AreaSummary> {
        self.data.process_data_for_area(area)
    }

    /// Statistics panel fragment for an area
    pub fn output_panel(&self, area: &str) -> DataResult<String> {
        let summary = self.summary(area)?;
        Ok(render_output_panel(&summary))
    }

    /// Recycling-by-area chart
    pub fn area_figure(&self, area: &str) -> DataResult<Plot> {
        self.area_chart.create_chart(area)
    }

    /// Recycling-by-year chart
    pub fn year_figure(&self, period: &str) -> DataResult<Plot> {
        self.year_chart.create_chart(period)
    }

    /// Full page with `area` selected (default area when `None`)
    pub fn render_page(&self, area: Option<&str>) -> DataResult<String> {
        let area = area.unwrap_or(self.default_area.as_str());
        let period = self.default_period();

        let page = PageContent {
            areas: self.data.area_list().to_vec(),
            selected_area: area.to_string(),
            periods: self.data.periods().iter().map(|p| p.to_string()).collect(),
            summary: self.summary(area)?,
            area_figure: self.area_figure(area)?.to_json(),
            year_figure: self.year_figure(&period)?.to_json(),
            selected_period: period,
        };

        Ok(page.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        let data = Arc::new(RecyclingData::bundled("England").unwrap());
        Dashboard::new(data, "London", None).unwrap()
    }

    #[test]
    fn test_defaults() {
        let dashboard = dashboard();
        assert_eq!(dashboard.default_area(), "London");
        assert_eq!(dashboard.default_period(), "2018/19");
    }

    #[test]
    fn test_rejects_unknown_defaults() {
        let data = Arc::new(RecyclingData::bundled("England").unwrap());
        assert!(Dashboard::new(Arc::clone(&data), "Atlantis", None).is_err());
        assert!(Dashboard::new(data, "London", Some("1990/91".to_string())).is_err());
    }

    #[test]
    fn test_known_area_gives_panel_and_chart() {
        let dashboard = dashboard();

        let panel = dashboard.output_panel("Bexley").unwrap();
        assert!(panel.contains("9%"));

        let figure: serde_json::Value =
            serde_json::from_str(&dashboard.area_figure("Bexley").unwrap().to_json()).unwrap();
        assert_eq!(figure["data"][0]["name"], "Bexley");
    }

    #[test]
    fn test_render_page_default_area() {
        let html = dashboard().render_page(None).unwrap();
        assert!(html.contains(r#"id="card_name""#));
        assert!(html.contains("London</h4>"));
    }

    #[test]
    fn test_render_page_unknown_area() {
        assert!(matches!(
            dashboard().render_page(Some("Atlantis")),
            Err(DataError::AreaNotFound(_))
        ));
    }
}

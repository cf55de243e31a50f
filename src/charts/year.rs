//! Recycling by year chart
//!
//! Bar chart ranking every area's recycling rate within one period.

use std::sync::Arc;

use plotly::common::{Marker, Title};
use plotly::layout::{Axis, Margin};
use plotly::{Bar, Layout, Plot};

use super::{BAR_COLOR, HIGHLIGHT_COLOR, RATE_AXIS_TITLE};
use crate::data::{DataResult, RecyclingData};

/// Builds the by-year bar chart
#[derive(Debug, Clone)]
pub struct RecyclingBarChart {
    data: Arc<RecyclingData>,
}

impl RecyclingBarChart {
    pub fn new(data: Arc<RecyclingData>) -> Self {
        Self { data }
    }

    /// Bar chart of all areas in the period labelled `period`, highest first
    pub fn create_chart(&self, period: &str) -> DataResult<Plot> {
        let period = self.data.find_period(period)?;
        let national = self.data.national_area();

        let mut rates = self.data.rates_for_period(period)?;
        // stable sort keeps dataset order for equal rates
        rates.sort_by(|a, b| b.1.total_cmp(&a.1));

        let colors: Vec<&'static str> = rates
            .iter()
            .map(|(area, _)| {
                if *area == national {
                    HIGHLIGHT_COLOR
                } else {
                    BAR_COLOR
                }
            })
            .collect();
        let x: Vec<String> = rates.iter().map(|(area, _)| area.to_string()).collect();
        let y: Vec<f64> = rates.iter().map(|(_, rate)| *rate).collect();

        let mut plot = Plot::new();
        plot.add_trace(
            Bar::new(x, y)
                .name(period.label())
                .marker(Marker::new().color_array(colors)),
        );

        let layout = Layout::new()
            .title(Title::new(&format!("Recycling rates by area in {}", period)))
            .x_axis(Axis::new().title(Title::new("Area")).tick_angle(-45.0))
            .y_axis(
                Axis::new()
                    .title(Title::new(RATE_AXIS_TITLE))
                    .tick_suffix("%"),
            )
            .show_legend(false)
            .margin(Margin::new().left(60).right(20).top(60).bottom(120));
        plot.set_layout(layout);

        tracing::debug!(period = %period, bars = rates.len(), "Built year chart");

        Ok(plot)
    }

    /// Bar chart for the most recent period in the dataset
    pub fn create_latest_chart(&self) -> DataResult<Plot> {
        self.create_chart(self.data.latest_period().label())
    }
}

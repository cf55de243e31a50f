//! Recycling by area chart
//!
//! Line chart of the selected area's recycling rate over time, plotted
//! against the national area.

use std::sync::Arc;

use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::{Axis, Margin};
use plotly::{Layout, Plot, Scatter};

use super::{AREA_COLOR, NATIONAL_COLOR, RATE_AXIS_TITLE};
use crate::data::{DataResult, RatePoint, RecyclingData};

/// Builds the comparison-by-area chart
#[derive(Debug, Clone)]
pub struct RecyclingChart {
    data: Arc<RecyclingData>,
}

impl RecyclingChart {
    pub fn new(data: Arc<RecyclingData>) -> Self {
        Self { data }
    }

    /// Line chart for `area` compared to the national area
    pub fn create_chart(&self, area: &str) -> DataResult<Plot> {
        let national = self.data.national_area();
        let area_points = self.data.area_series(area)?;

        let mut plot = Plot::new();
        plot.add_trace(series_trace(area, area_points, AREA_COLOR));

        let mut traces = 1;
        if area != national {
            let national_points = self.data.area_series(national)?;
            plot.add_trace(series_trace(national, national_points, NATIONAL_COLOR));
            traces += 1;
        }

        let layout = Layout::new()
            .title(Title::new(&format!(
                "Recycling rate for {} compared to {}",
                area, national
            )))
            .x_axis(Axis::new().title(Title::new("Period")))
            .y_axis(
                Axis::new()
                    .title(Title::new(RATE_AXIS_TITLE))
                    .range(vec![0.0, 100.0])
                    .tick_suffix("%"),
            )
            .show_legend(true)
            .margin(Margin::new().left(60).right(20).top(60).bottom(80));
        plot.set_layout(layout);

        tracing::debug!(area = %area, traces, "Built area chart");

        Ok(plot)
    }
}

fn series_trace(name: &str, points: &[RatePoint], color: &'static str) -> Box<Scatter<String, f64>> {
    let x = points.iter().map(|p| p.period.to_string()).collect();
    let y = points.iter().map(|p| p.rate).collect();

    Scatter::new(x, y)
        .name(name)
        .mode(Mode::LinesMarkers)
        .line(Line::new().color(color).width(3.0))
        .marker(Marker::new().color(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;
    use serde_json::Value;

    fn chart() -> RecyclingChart {
        RecyclingChart::new(Arc::new(RecyclingData::bundled("England").unwrap()))
    }

    fn to_value(plot: &Plot) -> Value {
        serde_json::from_str(&plot.to_json()).unwrap()
    }

    #[test]
    fn test_area_chart_has_area_and_national_traces() {
        let json = to_value(&chart().create_chart("London").unwrap());
        let traces = json["data"].as_array().unwrap();

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["type"], "scatter");
        assert_eq!(traces[0]["mode"], "lines+markers");
        assert_eq!(traces[0]["name"], "London");
        assert_eq!(traces[0]["line"]["color"], AREA_COLOR);
        assert_eq!(traces[1]["name"], "England");
        assert_eq!(traces[1]["line"]["color"], NATIONAL_COLOR);
        assert_eq!(
            json["layout"]["title"]["text"],
            "Recycling rate for London compared to England"
        );

        let x = traces[0]["x"].as_array().unwrap();
        assert_eq!(x.first().unwrap(), "2010/11");
        assert_eq!(x.last().unwrap(), "2018/19");
        assert_eq!(traces[0]["y"].as_array().unwrap().last().unwrap(), 33.0);
    }

    #[test]
    fn test_rate_axis_fixed_to_percent_range() {
        let json = to_value(&chart().create_chart("Camden").unwrap());
        assert_eq!(json["layout"]["yaxis"]["range"][1], 100.0);
        assert_eq!(json["layout"]["yaxis"]["ticksuffix"], "%");
    }

    #[test]
    fn test_national_area_has_single_trace() {
        let json = to_value(&chart().create_chart("England").unwrap());
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_area() {
        assert!(matches!(
            chart().create_chart("Atlantis"),
            Err(DataError::AreaNotFound(_))
        ));
    }
}

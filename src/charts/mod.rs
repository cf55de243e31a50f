//! Dashboard Charts
//!
//! Figures are built on the server as [`plotly::Plot`] documents and drawn
//! by plotly.js in the browser.
//!
//! - **area**: Recycling rate of one area against the national area
//! - **year**: Ranking of all areas within one period

pub mod area;
pub mod year;

pub use area::RecyclingChart;
pub use plotly::Plot;
pub use year::RecyclingBarChart;

/// Line color for the selected area
pub const AREA_COLOR: &str = "#2C7FB8";

/// Line color for the national comparison series
pub const NATIONAL_COLOR: &str = "#7F7F7F";

/// Bar color for ordinary areas
pub const BAR_COLOR: &str = "#41AB5D";

/// Bar color for the national area
pub const HIGHLIGHT_COLOR: &str = "#343A40";

/// Axis title shared by both charts
pub(crate) const RATE_AXIS_TITLE: &str = "Recycling rate (%)";

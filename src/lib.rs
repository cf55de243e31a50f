//! # Recycling Dashboard
//!
//! Interactive dashboard of household recycling rates for UK local authority
//! areas. Loads a dataset, computes per-area summary statistics and serves a
//! single page with a statistics panel and two charts, refreshed through
//! callback endpoints when the selected area changes.
//!
//! ## Modules
//!
//! - [`data`]: Dataset loading and per-area statistics
//! - [`charts`]: Recycling-by-area and recycling-by-year figures
//! - [`dashboard`]: Page layout and statistics panel (leptos, rendered on the server)
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recycling_dashboard::charts::RecyclingChart;
//! use recycling_dashboard::data::RecyclingData;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let data = Arc::new(RecyclingData::bundled("England")?);
//!
//!     let summary = data.process_data_for_area("London")?;
//!     println!("Best period: {}", summary.best_period);
//!
//!     let figure = RecyclingChart::new(Arc::clone(&data)).create_chart("London")?;
//!     println!("{}", figure.to_json());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod logging;

// Re-export top-level types for convenience
pub use data::{
    AreaSummary, DataError, DataResult, Period, RatePoint, RecyclingData, RecyclingRecord,
};

pub use charts::{Plot, RecyclingBarChart, RecyclingChart};

pub use dashboard::Dashboard;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};

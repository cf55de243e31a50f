//! Recycling Dataset
//!
//! Loading and aggregation of household recycling rates:
//!
//! - **types**: Core data structures (Period, RecyclingRecord, RatePoint)
//! - **loader**: CSV loading with header-based column detection
//! - **stats**: Indexed dataset and per-area summary statistics
//! - **format**: Percentage formatting for display
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use recycling_dashboard::data::RecyclingData;
//!
//! let data = RecyclingData::bundled("England")?;
//! let summary = data.process_data_for_area("London")?;
//!
//! println!(
//!     "London compared to England: {}",
//!     summary.formatted().compare_to_eng
//! );
//! # Ok::<(), recycling_dashboard::data::DataError>(())
//! ```

pub mod error;
pub mod format;
pub mod loader;
pub mod stats;
pub mod types;

pub use error::{DataError, DataResult};
pub use format::{format_optional_percent, format_percent};
pub use loader::{load_bundled, load_path, load_reader, ColumnMapping, LoadedDataset};
pub use stats::{AreaSummary, FormattedSummary, RecyclingData, DEFAULT_NATIONAL_AREA};
pub use types::{Period, RatePoint, RecyclingRecord};

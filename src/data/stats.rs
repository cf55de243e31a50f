//! Recycling Data Aggregation
//!
//! `RecyclingData` indexes the loaded records by area and by period and
//! computes the per-area summary shown in the dashboard's statistics panel.
//! It is immutable once built; each call to
//! [`RecyclingData::process_data_for_area`] returns a fresh [`AreaSummary`].

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use super::error::{DataError, DataResult};
use super::format::{format_optional_percent, format_percent};
use super::loader;
use super::types::{Period, RatePoint, RecyclingRecord};

/// Default area every other area is compared against
pub const DEFAULT_NATIONAL_AREA: &str = "England";

/// Indexed recycling dataset
#[derive(Debug, Clone)]
pub struct RecyclingData {
    /// Areas in first-appearance order
    areas: Vec<String>,
    /// Distinct periods, ascending
    periods: Vec<Period>,
    /// Time series per area, ascending by period
    series: HashMap<String, Vec<RatePoint>>,
    national_area: String,
}

/// Summary statistics for a single area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaSummary {
    pub area: String,
    pub national_area: String,
    /// Most recent period the area has a value for
    pub latest_period: Period,
    pub latest_rate: f64,
    /// Latest rate minus the national rate in the same period (percentage points)
    pub compare_to_eng: Option<f64>,
    /// Latest rate minus the previous period's rate (percentage points)
    pub change_area: Option<f64>,
    /// Period with the highest rate (earliest wins ties)
    pub best_period: Period,
    pub best_rate: f64,
}

impl AreaSummary {
    /// Display strings for the statistics panel
    pub fn formatted(&self) -> FormattedSummary {
        FormattedSummary {
            compare_to_eng: format_optional_percent(self.compare_to_eng),
            change_area: format_optional_percent(self.change_area),
            best_period: self.best_period.to_string(),
            best_rate: format_percent(self.best_rate),
            latest_rate: format_percent(self.latest_rate),
        }
    }
}

/// Summary values rendered as panel text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedSummary {
    pub compare_to_eng: String,
    pub change_area: String,
    pub best_period: String,
    pub best_rate: String,
    pub latest_rate: String,
}

impl RecyclingData {
    /// Build the index from records, comparing against `national_area`
    pub fn from_records(
        records: Vec<RecyclingRecord>,
        national_area: impl Into<String>,
    ) -> DataResult<Self> {
        let national_area = national_area.into();

        if records.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let mut areas: Vec<String> = Vec::new();
        let mut periods: BTreeSet<Period> = BTreeSet::new();
        let mut series: HashMap<String, Vec<RatePoint>> = HashMap::new();

        for record in records {
            if !series.contains_key(&record.area) {
                areas.push(record.area.clone());
            }
            periods.insert(record.period.clone());
            series.entry(record.area).or_default().push(RatePoint {
                period: record.period,
                rate: record.rate,
            });
        }

        for points in series.values_mut() {
            points.sort_by(|a, b| a.period.cmp(&b.period));
        }

        if !series.contains_key(&national_area) {
            return Err(DataError::NationalAreaMissing(national_area));
        }

        Ok(Self {
            areas,
            periods: periods.into_iter().collect(),
            series,
            national_area,
        })
    }

    /// Load from a CSV file
    pub fn load(path: &Path, national_area: &str) -> DataResult<Self> {
        let loaded = loader::load_path(path)?;
        Self::from_records(loaded.records, national_area)
    }

    /// Load the dataset bundled with the binary
    pub fn bundled(national_area: &str) -> DataResult<Self> {
        let loaded = loader::load_bundled()?;
        Self::from_records(loaded.records, national_area)
    }

    /// Load from `path` if given, otherwise the bundled dataset
    pub fn load_or_bundled(path: Option<&Path>, national_area: &str) -> DataResult<Self> {
        match path {
            Some(path) => Self::load(path, national_area),
            None => Self::bundled(national_area),
        }
    }

    /// Areas for the selector, in dataset order
    pub fn area_list(&self) -> &[String] {
        &self.areas
    }

    /// Distinct periods, oldest first
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Most recent period in the dataset
    pub fn latest_period(&self) -> &Period {
        // from_records guarantees at least one record
        &self.periods[self.periods.len() - 1]
    }

    pub fn national_area(&self) -> &str {
        &self.national_area
    }

    pub fn has_area(&self, area: &str) -> bool {
        self.series.contains_key(area)
    }

    /// Look up a period by its label
    pub fn find_period(&self, label: &str) -> DataResult<&Period> {
        let label = label.trim();
        self.periods
            .iter()
            .find(|p| p.label() == label)
            .ok_or_else(|| DataError::PeriodNotFound(label.to_string()))
    }

    /// Time series for an area, oldest first
    pub fn area_series(&self, area: &str) -> DataResult<&[RatePoint]> {
        self.series
            .get(area)
            .map(Vec::as_slice)
            .ok_or_else(|| DataError::AreaNotFound(area.to_string()))
    }

    /// Rate of `area` in `period`, if recorded
    pub fn rate(&self, area: &str, period: &Period) -> Option<f64> {
        self.series
            .get(area)?
            .iter()
            .find(|p| &p.period == period)
            .map(|p| p.rate)
    }

    /// Every area's rate in a period, in dataset order
    pub fn rates_for_period(&self, period: &Period) -> DataResult<Vec<(&str, f64)>> {
        if !self.periods.contains(period) {
            return Err(DataError::PeriodNotFound(period.to_string()));
        }

        Ok(self
            .areas
            .iter()
            .filter_map(|area| self.rate(area, period).map(|rate| (area.as_str(), rate)))
            .collect())
    }

    /// Compute the statistics panel values for an area
    pub fn process_data_for_area(&self, area: &str) -> DataResult<AreaSummary> {
        let points = self.area_series(area)?;

        let latest = points
            .last()
            .ok_or_else(|| DataError::AreaNotFound(area.to_string()))?;

        let compare_to_eng = self
            .rate(&self.national_area, &latest.period)
            .map(|national| latest.rate - national);

        let change_area = points
            .len()
            .checked_sub(2)
            .map(|idx| latest.rate - points[idx].rate);

        // strictly greater keeps the earliest period on ties
        let best = points.iter().skip(1).fold(&points[0], |best, p| {
            if p.rate > best.rate {
                p
            } else {
                best
            }
        });

        tracing::debug!(
            area = %area,
            latest_period = %latest.period,
            best_period = %best.period,
            "Processed area statistics"
        );

        Ok(AreaSummary {
            area: area.to_string(),
            national_area: self.national_area.clone(),
            latest_period: latest.period.clone(),
            latest_rate: latest.rate,
            compare_to_eng,
            change_area,
            best_period: best.period.clone(),
            best_rate: best.rate,
        })
    }
}

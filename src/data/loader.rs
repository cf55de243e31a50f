//! Dataset Loader
//!
//! Reads household recycling rates from CSV. Columns are located from the
//! header row, so the area/period/rate columns may appear in any order and
//! extra columns are ignored.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::error::{DataError, DataResult};
use super::types::{Period, RecyclingRecord};

/// Dataset compiled into the binary, used when no path is configured
pub const BUNDLED_DATASET: &str = include_str!("../../data/household_recycling.csv");

/// Positions of the required columns within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub area: usize,
    pub period: usize,
    pub rate: usize,
}

impl ColumnMapping {
    /// Detect column positions from a header row
    ///
    /// Matching is case-insensitive. A header equal to one of the usual
    /// names (`Area`, `Year`, `Recycling_Rates`, ...) wins; otherwise the
    /// first header mentioning "area"/"authority", "year"/"period" or "rate"
    /// is used. A column is assigned to at most one role.
    pub fn detect(headers: &csv::StringRecord) -> DataResult<Self> {
        let headers: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let mut taken = Vec::with_capacity(3);

        let rate = find_column(
            &headers,
            &taken,
            &["recycling_rates", "recycling_rate", "recycling rate", "rate"],
            &["rate"],
        )
        .ok_or(DataError::MissingColumn("rate"))?;
        taken.push(rate);

        let period = find_column(
            &headers,
            &taken,
            &["year", "period", "financial year"],
            &["year", "period"],
        )
        .ok_or(DataError::MissingColumn("period"))?;
        taken.push(period);

        let area = find_column(
            &headers,
            &taken,
            &["area", "area name", "authority", "local authority"],
            &["area", "authority"],
        )
        .ok_or(DataError::MissingColumn("area"))?;

        Ok(Self { area, period, rate })
    }
}

/// Index of the first exact match, else the first header containing a keyword
fn find_column(
    headers: &[String],
    taken: &[usize],
    exact: &[&str],
    keywords: &[&str],
) -> Option<usize> {
    let candidates: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| !taken.contains(idx))
        .map(|(idx, header)| (idx, header.as_str()))
        .collect();

    candidates
        .iter()
        .find(|(_, header)| exact.contains(header))
        .or_else(|| {
            candidates
                .iter()
                .find(|(_, header)| keywords.iter().any(|k| header.contains(k)))
        })
        .map(|(idx, _)| *idx)
}

/// Outcome of loading a dataset
#[derive(Debug)]
pub struct LoadedDataset {
    pub records: Vec<RecyclingRecord>,
    /// Rows without a rate value
    pub rows_skipped: usize,
}

/// Load a dataset from a CSV file
pub fn load_path(path: &Path) -> DataResult<LoadedDataset> {
    let file = std::fs::File::open(path)?;
    let loaded = load_reader(file)?;

    tracing::debug!(
        path = %path.display(),
        records = loaded.records.len(),
        skipped = loaded.rows_skipped,
        "Loaded recycling dataset"
    );

    Ok(loaded)
}

/// Load the dataset bundled with the binary
pub fn load_bundled() -> DataResult<LoadedDataset> {
    load_reader(BUNDLED_DATASET.as_bytes())
}

/// Load a dataset from any CSV source
pub fn load_reader<R: Read>(source: R) -> DataResult<LoadedDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let columns = ColumnMapping::detect(&headers)?;

    let mut records = Vec::new();
    let mut seen: HashSet<(String, Period)> = HashSet::new();
    let mut rows_skipped = 0;

    for result in reader.records() {
        let row = result?;
        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or_default();

        let field = |idx: usize| row.get(idx).unwrap_or("");

        let area = field(columns.area);
        if area.is_empty() {
            return Err(DataError::InvalidRecord {
                line,
                reason: "area is empty".to_string(),
            });
        }

        let rate_str = field(columns.rate);
        if rate_str.is_empty() {
            rows_skipped += 1;
            continue;
        }
        let rate = parse_rate(rate_str).map_err(|reason| DataError::InvalidRecord { line, reason })?;

        let period = Period::parse(field(columns.period)).map_err(|e| DataError::InvalidRecord {
            line,
            reason: e.to_string(),
        })?;

        if !seen.insert((area.to_string(), period.clone())) {
            return Err(DataError::DuplicateRecord {
                line,
                area: area.to_string(),
                period: period.to_string(),
            });
        }

        records.push(RecyclingRecord::new(area, period, rate));
    }

    if records.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    Ok(LoadedDataset {
        records,
        rows_skipped,
    })
}

/// Parse a rate cell, accepting an optional trailing percent sign
fn parse_rate(value: &str) -> Result<f64, String> {
    let trimmed = value.trim_end_matches('%').trim();
    let rate: f64 = trimmed
        .parse()
        .map_err(|_| format!("rate '{}' is not a number", value))?;

    if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
        return Err(format!("rate {} is outside 0-100", rate));
    }

    Ok(rate)
}

//! Core data types for recycling statistics
//!
//! - `Period`: A reporting year or fiscal year range
//! - `RecyclingRecord`: One (area, period, rate) observation
//! - `RatePoint`: One value of an area's time series

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::sync::OnceLock;

use super::error::{DataError, DataResult};

fn period_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{4})(?:\s*[/-]\s*(\d{2}|\d{4}))?$").expect("period pattern is valid")
    })
}

/// A reporting period
///
/// Either a calendar year (`2019`) or a fiscal year range (`2018/19`,
/// `2018-2019`). The original label is kept for display; ordering uses the
/// start year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period {
    label: String,
    start_year: u16,
    end_year: Option<u16>,
}

impl Period {
    /// Parse a period label
    pub fn parse(label: &str) -> DataResult<Self> {
        let label = label.trim();
        let invalid = || DataError::InvalidPeriod(label.to_string());

        let caps = period_pattern().captures(label).ok_or_else(invalid)?;
        let start_year: u16 = caps[1].parse().map_err(|_| invalid())?;

        let end_year = match caps.get(2) {
            None => None,
            Some(m) if m.as_str().len() == 2 => {
                let suffix: u16 = m.as_str().parse().map_err(|_| invalid())?;
                // 1999/00 rolls into the next century
                let century = start_year - start_year % 100;
                let mut end = century + suffix;
                if end <= start_year {
                    end += 100;
                }
                Some(end)
            }
            Some(m) => Some(m.as_str().parse().map_err(|_| invalid())?),
        };

        if let Some(end) = end_year {
            if end != start_year + 1 {
                return Err(invalid());
            }
        }

        Ok(Self {
            label: label.to_string(),
            start_year,
            end_year,
        })
    }

    /// Label as it appeared in the dataset
    pub fn label(&self) -> &str {
        &self.label
    }

    /// First calendar year covered by the period
    pub fn start_year(&self) -> u16 {
        self.start_year
    }

    /// Whether this is a fiscal year range rather than a single year
    pub fn is_range(&self) -> bool {
        self.end_year.is_some()
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start_year
            .cmp(&other.start_year)
            .then_with(|| self.end_year.cmp(&other.end_year))
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

impl std::str::FromStr for Period {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::parse(s)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Period::parse(&label).map_err(serde::de::Error::custom)
    }
}

/// One observation of an area's household recycling rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecyclingRecord {
    /// Local authority area name
    pub area: String,
    /// Reporting period
    pub period: Period,
    /// Recycling rate in percent (0-100)
    pub rate: f64,
}

impl RecyclingRecord {
    pub fn new(area: impl Into<String>, period: Period, rate: f64) -> Self {
        Self {
            area: area.into(),
            period,
            rate,
        }
    }
}

/// A single value in an area's time series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatePoint {
    pub period: Period,
    pub rate: f64,
}

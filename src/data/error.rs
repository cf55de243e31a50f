//! Dataset error types
//!
//! Defines all errors that can occur while loading or aggregating
//! recycling data.

use thiserror::Error;

/// Errors that can occur in the data layer
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required column could not be found in the header row
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// A row could not be turned into a record
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// Period label is not a year or fiscal year range
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Same (area, period) pair appears twice
    #[error("Duplicate record on line {line}: {area} {period}")]
    DuplicateRecord {
        line: usize,
        area: String,
        period: String,
    },

    /// Dataset contains no records
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Requested area does not exist
    #[error("Area not found: {0}")]
    AreaNotFound(String),

    /// Requested period does not exist
    #[error("Period not found: {0}")]
    PeriodNotFound(String),

    /// National comparison area is absent from the dataset
    #[error("National area missing from dataset: {0}")]
    NationalAreaMissing(String),
}

impl DataError {
    /// Whether the error was caused by an unknown lookup key
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DataError::AreaNotFound(_) | DataError::PeriodNotFound(_)
        )
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::AreaNotFound("Atlantis".to_string());
        assert_eq!(err.to_string(), "Area not found: Atlantis");

        let err = DataError::InvalidRecord {
            line: 4,
            reason: "rate is not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid record on line 4: rate is not a number"
        );
    }

    #[test]
    fn test_not_found_classification() {
        assert!(DataError::AreaNotFound("x".into()).is_not_found());
        assert!(DataError::PeriodNotFound("1999".into()).is_not_found());
        assert!(!DataError::EmptyDataset.is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let data_err: DataError = io_err.into();
        assert!(matches!(data_err, DataError::Io(_)));
    }
}

//! Error types for dataset loading and validation
//!
//! Every variant here is fatal at startup: the shell prints the message
//! and exits without entering the dashboard. Recoverable per-page
//! conditions live in the dashboard layer instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a dataset or validating its target column.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read or parsed.
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: polars::error::PolarsError,
    },

    /// The file extension is not a supported format.
    #[error("Unsupported file format: '{extension}'. Supported formats: csv, parquet")]
    UnsupportedFormat { extension: String },

    /// The file parsed cleanly but holds zero data rows.
    #[error("Dataset '{}' contains no rows", .path.display())]
    EmptyDataset { path: PathBuf },

    /// The configured target column does not exist in the dataset.
    #[error("Target column '{target}' not found. Available columns: {}", .available.join(", "))]
    TargetNotFound {
        target: String,
        available: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = DataError::UnsupportedFormat {
            extension: "xlsx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported file format: 'xlsx'. Supported formats: csv, parquet"
        );
    }

    #[test]
    fn test_empty_dataset_display() {
        let err = DataError::EmptyDataset {
            path: PathBuf::from("data.csv"),
        };
        assert_eq!(err.to_string(), "Dataset 'data.csv' contains no rows");
    }

    #[test]
    fn test_target_not_found_lists_columns() {
        let err = DataError::TargetNotFound {
            target: "default_ind".to_string(),
            available: vec!["age".to_string(), "income".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'default_ind' not found"));
        assert!(msg.contains("age, income"));
    }
}

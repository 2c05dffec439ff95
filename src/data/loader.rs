//! Reading the input file into a DataFrame, dispatching on extension

use std::path::Path;

use polars::prelude::*;

use super::error::DataError;

/// Build a lazy scan of a dataset, dispatching on file extension.
pub fn scan_dataset(path: &Path, infer_schema_length: usize) -> Result<LazyFrame, DataError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "csv" => {
            // 0 means scan the whole file before settling on dtypes
            let schema_length = if infer_schema_length == 0 {
                None
            } else {
                Some(infer_schema_length)
            };
            LazyCsvReader::new(path)
                .with_infer_schema_length(schema_length)
                .finish()
                .map_err(|source| DataError::Read {
                    path: path.to_path_buf(),
                    source,
                })?
        }
        "parquet" => {
            LazyFrame::scan_parquet(path, Default::default()).map_err(|source| DataError::Read {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => return Err(DataError::UnsupportedFormat { extension }),
    };

    Ok(lf)
}

/// Load a dataset eagerly. The dashboard works on a single materialized
/// frame, so collection happens once here at startup.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame, DataError> {
    let df = scan_dataset(path, infer_schema_length)?
        .collect()
        .map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if df.height() == 0 {
        return Err(DataError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    Ok(df)
}

/// Estimated in-memory size of the frame in megabytes.
pub fn estimated_memory_mb(df: &DataFrame) -> f64 {
    df.estimated_size() as f64 / (1024.0 * 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_rejected() {
        let result = scan_dataset(Path::new("data.xlsx"), 100);
        assert!(matches!(
            result,
            Err(DataError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_missing_extension_rejected() {
        let result = scan_dataset(Path::new("data"), 100);
        assert!(matches!(
            result,
            Err(DataError::UnsupportedFormat { .. })
        ));
    }
}

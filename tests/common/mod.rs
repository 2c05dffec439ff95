//! Fixture DataFrames and temp-file helpers shared across integration tests

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a small credit-style DataFrame with known characteristics
///
/// Columns:
/// - `balance`: numeric with 2 nulls
/// - `utilization`: clean numeric in [0, 1]
/// - `tenure_months`: clean integer feature
/// - `state`: categorical
/// - `default_ind`: binary 0/1 target (4 events out of 12 rows)
pub fn create_credit_dataframe() -> DataFrame {
    df! {
        "balance" => [Some(120.0f64), Some(540.5), None, Some(890.0), Some(230.0), Some(1500.0), Some(760.0), None, Some(420.0), Some(980.0), Some(1100.0), Some(60.0)],
        "utilization" => [0.10f64, 0.45, 0.32, 0.78, 0.15, 0.92, 0.55, 0.40, 0.28, 0.81, 0.67, 0.05],
        "tenure_months" => [6i32, 24, 36, 12, 48, 8, 60, 18, 30, 10, 22, 40],
        "state" => ["CA", "NY", "CA", "TX", "NY", "TX", "CA", "CA", "NY", "TX", "CA", "NY"],
        "default_ind" => [0i32, 0, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0],
    }
    .unwrap()
}

/// Create a DataFrame where the feature splits the target perfectly:
/// values 1-5 never default, values 6-10 always default
pub fn create_clean_split_dataframe() -> DataFrame {
    df! {
        "score" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "default_ind" => [0i32, 0, 0, 0, 0, 1, 1, 1, 1, 1],
    }
    .unwrap()
}

/// Create a wide all-numeric DataFrame with a random fill, used to compare
/// the two correlation code paths on identical input
pub fn create_wide_numeric_dataframe(rows: usize, cols: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let mut columns: Vec<Column> = Vec::with_capacity(cols + 1);

    let target: Vec<i32> = (0..rows).map(|_| i32::from(rng.gen_bool(0.3))).collect();
    columns.push(Column::new("default_ind".into(), target));

    for i in 0..cols {
        let values: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>() * 100.0).collect();
        columns.push(Column::new(format!("feat_{}", i).into(), values));
    }

    DataFrame::new(columns).unwrap()
}

/// Write the frame to a CSV file inside a fresh temp directory.
/// The TempDir must stay alive for as long as the path is used.
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.csv");

    let mut file = std::fs::File::create(&path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (dir, path)
}

/// Parquet twin of [`create_temp_csv`]
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.parquet");

    let file = std::fs::File::create(&path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (dir, path)
}

//! Tests for CLI argument parsing

use binsight::cli::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["binsight"]);

    assert_eq!(
        cli.input,
        PathBuf::from("data.csv"),
        "Default input should be data.csv"
    );
    assert_eq!(
        cli.target, "default_ind",
        "Default target should be default_ind"
    );
    assert_eq!(cli.bins, 5, "Default bin count should be 5");
    assert_eq!(
        cli.infer_schema_length, 10000,
        "Default schema inference should be 10000"
    );
    assert!(
        cli.command.is_none(),
        "No subcommand should mean dashboard mode"
    );
}

#[test]
fn test_cli_short_flags() {
    let cli = Cli::parse_from(["binsight", "-i", "loans.parquet", "-t", "bad_flag", "-b", "8"]);

    assert_eq!(cli.input, PathBuf::from("loans.parquet"));
    assert_eq!(cli.target, "bad_flag");
    assert_eq!(cli.bins, 8);
}

#[test]
fn test_cli_long_flags() {
    let cli = Cli::parse_from([
        "binsight",
        "--input",
        "portfolio.csv",
        "--target",
        "charged_off",
        "--bins",
        "10",
        "--infer-schema-length",
        "500",
    ]);

    assert_eq!(cli.input, PathBuf::from("portfolio.csv"));
    assert_eq!(cli.target, "charged_off");
    assert_eq!(cli.bins, 10);
    assert_eq!(cli.infer_schema_length, 500);
}

#[test]
fn test_cli_full_table_scan() {
    let cli = Cli::parse_from(["binsight", "--infer-schema-length", "0"]);

    assert_eq!(cli.infer_schema_length, 0);
}

#[test]
fn test_cli_bins_accepts_bounds() {
    let low = Cli::parse_from(["binsight", "--bins", "2"]);
    assert_eq!(low.bins, 2);

    let high = Cli::parse_from(["binsight", "--bins", "10"]);
    assert_eq!(high.bins, 10);
}

#[test]
fn test_cli_bins_rejects_too_low() {
    let result = Cli::try_parse_from(["binsight", "--bins", "1"]);

    assert!(result.is_err(), "Bins below 2 should be rejected");
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("bins must be between 2 and 10"),
        "Error should explain the valid range, got: {}",
        message
    );
}

#[test]
fn test_cli_bins_rejects_too_high() {
    let result = Cli::try_parse_from(["binsight", "--bins", "11"]);

    assert!(result.is_err(), "Bins above 10 should be rejected");
}

#[test]
fn test_cli_bins_rejects_non_numeric() {
    let result = Cli::try_parse_from(["binsight", "--bins", "many"]);

    assert!(result.is_err(), "Non-numeric bins should be rejected");
}

#[test]
fn test_cli_report_subcommand_defaults() {
    let cli = Cli::parse_from(["binsight", "report"]);

    match cli.command {
        Some(Commands::Report {
            feature,
            correlation,
            export,
        }) => {
            assert!(feature.is_none(), "No feature detail by default");
            assert!(!correlation, "Correlation pairs should be opt-in");
            assert!(export.is_none(), "No export by default");
        }
        other => panic!("Expected report subcommand, got {:?}", other),
    }
}

#[test]
fn test_cli_report_subcommand_full() {
    let cli = Cli::parse_from([
        "binsight",
        "-i",
        "loans.csv",
        "report",
        "--feature",
        "utilization",
        "--correlation",
        "--export",
        "snapshot.json",
    ]);

    assert_eq!(cli.input, PathBuf::from("loans.csv"));
    match cli.command {
        Some(Commands::Report {
            feature,
            correlation,
            export,
        }) => {
            assert_eq!(feature.as_deref(), Some("utilization"));
            assert!(correlation);
            assert_eq!(export, Some(PathBuf::from("snapshot.json")));
        }
        other => panic!("Expected report subcommand, got {:?}", other),
    }
}

#[test]
fn test_cli_report_feature_short_flag() {
    let cli = Cli::parse_from(["binsight", "report", "-f", "balance"]);

    match cli.command {
        Some(Commands::Report { feature, .. }) => {
            assert_eq!(feature.as_deref(), Some("balance"));
        }
        other => panic!("Expected report subcommand, got {:?}", other),
    }
}

#[test]
fn test_cli_global_flags_before_subcommand() {
    let cli = Cli::parse_from(["binsight", "-t", "charged_off", "-b", "3", "report"]);

    assert_eq!(cli.target, "charged_off");
    assert_eq!(cli.bins, 3);
    assert!(matches!(cli.command, Some(Commands::Report { .. })));
}

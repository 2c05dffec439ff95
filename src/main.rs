//! Binsight: Terminal Data Exploration Dashboard
//!
//! Loads a CSV or Parquet dataset with a binary outcome column, prints a
//! short load summary, then opens the interactive dashboard or runs the
//! report subcommand.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use binsight::cli::{Cli, Commands};
use binsight::dashboard::run_dashboard;
use binsight::data::Dataset;
use binsight::report::{run_report, ReportOptions};
use binsight::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_fatal,
    print_info, print_success, CHART, FOLDER, TARGET,
};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        print_fatal(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    // Load and validate up front; anything that fails here is fatal
    let load_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let dataset = match Dataset::load(&cli.input, &cli.target, cli.infer_schema_length) {
        Ok(dataset) => dataset,
        Err(err) => {
            spinner.finish_and_clear();
            return Err(err);
        }
    };

    if dataset.target_summary.is_binary {
        finish_with_success(&spinner, "Dataset loaded");
    } else {
        finish_with_warning(
            &spinner,
            &format!(
                "Dataset loaded, but target '{}' is not a 0/1 binary column",
                cli.target
            ),
        );
    }

    let (rows, cols) = dataset.shape();
    println!("\n    {}Dataset Statistics:", CHART);
    println!("      {}Source: {}", FOLDER, dataset.source.display());
    println!(
        "      {}Target: {}",
        TARGET,
        style(&dataset.target).yellow()
    );
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", dataset.memory_mb);
    if let Some(rate) = dataset.target_summary.event_rate {
        println!(
            "      Event rate: {:.2}% ({} events / {} non-events)",
            rate * 100.0,
            dataset.target_summary.events,
            dataset.target_summary.non_events
        );
    }
    println!(
        "      {} {:.2}s",
        style("⏱").dim(),
        load_start.elapsed().as_secs_f64()
    );

    match &cli.command {
        Some(Commands::Report {
            feature,
            correlation,
            export,
        }) => {
            let options = ReportOptions {
                feature: feature.clone(),
                correlation: *correlation,
                bins: cli.bins,
                export: export.clone(),
            };
            run_report(&dataset, &options)
        }
        None => {
            println!();
            print_info("Opening dashboard (press q to quit)");
            run_dashboard(&dataset, cli.bins)?;
            print_success("Dashboard closed");
            Ok(())
        }
    }
}

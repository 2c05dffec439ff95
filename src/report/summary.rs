//! Plain-text summary report for non-interactive use
//!
//! Prints the same content the dashboard pages show, as styled tables on
//! stdout. Useful for piping into logs or skimming a dataset over ssh.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::analysis::{
    correlation_matrix, describe, event_rate_table, strongest_pairs, value_counts, DescribeStats,
    EventRateTable,
};
use crate::data::{numeric_values, target_values, ColumnKind, Dataset};
use crate::utils::{print_info, print_section_header, print_warning, SAVE};

use super::export::export_snapshot;

/// Most correlated pairs shown in the report
const MAX_REPORTED_PAIRS: usize = 15;

/// What the report subcommand should include
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Feature to break down in detail
    pub feature: Option<String>,
    /// Include the strongest correlated pairs
    pub correlation: bool,
    /// Bin count for event-rate tables
    pub bins: usize,
    /// Write the snapshot as JSON to this path
    pub export: Option<PathBuf>,
}

/// Print the report and, when requested, write the JSON snapshot.
pub fn run_report(dataset: &Dataset, options: &ReportOptions) -> Result<()> {
    print_overview(dataset);
    print_column_table(dataset);

    if let Some(feature) = &options.feature {
        print_feature_detail(dataset, feature, options.bins)?;
    }

    if options.correlation {
        print_correlated_pairs(dataset)?;
    }

    if let Some(path) = &options.export {
        export_snapshot(dataset, options.bins, options.correlation, path)?;
        println!();
        println!(
            "    {}{}",
            SAVE,
            style(format!("Snapshot written to {}", path.display())).green()
        );
    }

    Ok(())
}

fn print_overview(dataset: &Dataset) {
    print_section_header("DATASET OVERVIEW");

    let (rows, cols) = dataset.shape();
    let summary = &dataset.target_summary;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("Source"),
        Cell::new(dataset.source.display().to_string()),
    ]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(rows)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(cols)]);
    table.add_row(vec![
        Cell::new("Estimated memory"),
        Cell::new(format!("{:.2} MB", dataset.memory_mb)),
    ]);
    table.add_row(vec![
        Cell::new("Target"),
        Cell::new(&dataset.target).fg(Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Events (1)"), Cell::new(summary.events)]);
    table.add_row(vec![
        Cell::new("Non-events (0)"),
        Cell::new(summary.non_events),
    ]);
    if summary.out_of_range > 0 {
        table.add_row(vec![
            Cell::new("Other values"),
            Cell::new(summary.out_of_range).fg(Color::Yellow),
        ]);
    }

    match summary.event_rate {
        Some(rate) => {
            table.add_row(vec![
                Cell::new("Event rate"),
                Cell::new(format!("{:.2}%", rate * 100.0))
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
        }
        None => {
            table.add_row(vec![
                Cell::new("Event rate"),
                Cell::new("n/a").fg(Color::Yellow),
            ]);
        }
    }

    print_table(&table);

    if !summary.is_binary {
        println!();
        print_warning(&format!(
            "Target column '{}' is not a 0/1 binary column; event rates are plain means",
            dataset.target
        ));
    }
}

fn print_column_table(dataset: &Dataset) {
    print_section_header("COLUMNS");

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Kind").add_attribute(Attribute::Bold),
        Cell::new("Missing").add_attribute(Attribute::Bold),
        Cell::new("Distinct").add_attribute(Attribute::Bold),
    ]);

    for column in &dataset.columns {
        let name_cell = if column.name == dataset.target {
            Cell::new(&column.name).fg(Color::Yellow)
        } else {
            Cell::new(&column.name)
        };
        let missing_cell = if column.missing_ratio > 0.0 {
            Cell::new(format!("{:.1}%", column.missing_ratio * 100.0)).fg(Color::Red)
        } else {
            Cell::new("0.0%")
        };
        table.add_row(vec![
            name_cell,
            Cell::new(&column.dtype),
            Cell::new(column.kind.as_str()),
            missing_cell,
            Cell::new(column.distinct),
        ]);
    }

    print_table(&table);
}

fn print_feature_detail(dataset: &Dataset, feature: &str, bins: usize) -> Result<()> {
    print_section_header(&format!("FEATURE: {}", feature));

    let Some(summary) = dataset.column_summary(feature) else {
        print_warning(&format!("Column '{}' not found in dataset", feature));
        return Ok(());
    };

    match summary.kind {
        ColumnKind::Numeric => {
            let values = numeric_values(&dataset.df, feature)?;
            match describe(&values) {
                Some(stats) => print_describe_table(&stats),
                None => {
                    print_warning(&format!("No valid data to plot for {}.", feature));
                    return Ok(());
                }
            }

            if dataset.target_summary.is_binary_like {
                let target = target_values(&dataset.df, &dataset.target)?;
                let table = event_rate_table(&values, &target, bins);
                if !table.is_empty() {
                    print_event_rate_table(feature, &table);
                }
            }
        }
        ColumnKind::Categorical => {
            let counts = value_counts(dataset.df.column(feature)?)?;
            print_value_counts_table(&counts);
        }
    }

    Ok(())
}

fn print_describe_table(stats: &DescribeStats) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Statistic").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![Cell::new("count"), Cell::new(stats.count)]);
    for (label, value) in [
        ("mean", stats.mean),
        ("std", stats.std),
        ("min", stats.min),
        ("25%", stats.q25),
        ("50%", stats.median),
        ("75%", stats.q75),
        ("max", stats.max),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(format!("{:.4}", value))]);
    }

    print_table(&table);
}

fn print_event_rate_table(feature: &str, table: &EventRateTable) {
    println!();
    println!(
        "    {} {}",
        style("◆").cyan(),
        style(format!(
            "Event rate by bins of {} ({})",
            feature, table.strategy
        ))
        .white()
        .bold()
    );

    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED);
    out.set_header(vec![
        Cell::new("Bin").add_attribute(Attribute::Bold),
        Cell::new("Event rate").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);

    for row in &table.rows {
        out.add_row(vec![
            Cell::new(&row.bin),
            Cell::new(format!("{:.4}", row.event_rate)).fg(Color::Red),
            Cell::new(row.count),
        ]);
    }

    print_table(&out);
}

fn print_value_counts_table(counts: &[(String, usize)]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Value").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);

    for (value, count) in counts {
        table.add_row(vec![Cell::new(value), Cell::new(count)]);
    }

    print_table(&table);
}

fn print_correlated_pairs(dataset: &Dataset) -> Result<()> {
    print_section_header("STRONGEST CORRELATIONS");

    let matrix = correlation_matrix(&dataset.df)?;
    if matrix.is_empty() {
        print_warning("No numerical features available to generate a correlation matrix.");
        return Ok(());
    }

    let pairs = strongest_pairs(&matrix, MAX_REPORTED_PAIRS);
    if pairs.is_empty() {
        print_info("No correlated pairs to report");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Feature 1").add_attribute(Attribute::Bold),
        Cell::new("Feature 2").add_attribute(Attribute::Bold),
        Cell::new("Correlation").add_attribute(Attribute::Bold),
    ]);

    for pair in &pairs {
        let color = if pair.correlation.abs() > 0.7 {
            Color::Red
        } else if pair.correlation.abs() > 0.4 {
            Color::Yellow
        } else {
            Color::White
        };
        table.add_row(vec![
            Cell::new(&pair.feature1),
            Cell::new(&pair.feature2),
            Cell::new(format!("{:+.4}", pair.correlation)).fg(color),
        ]);
    }

    print_table(&table);
    Ok(())
}

fn print_table(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

//! Chart and table construction for the dashboard pages
//!
//! Every function renders straight into the frame. Bar charts carry their
//! values in text form as well, since a terminal bar has coarse resolution.

use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Rectangle},
        Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table,
    },
};

use crate::analysis::{
    histogram, ClassStats, CorrelationMatrix, DescribeStats, EventRateTable,
};
use crate::data::ColumnSummary;

/// Truncate to a character budget, with an ellipsis when something was cut.
pub fn truncate_label(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn bordered(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).bold())
}

/// Histogram of a numeric feature, with the bar count fitted to the area.
pub fn render_histogram(frame: &mut Frame, area: Rect, feature: &str, values: &[Option<f64>]) {
    let bar_width = 7u16;
    let max_bars = ((area.width.saturating_sub(2)) / (bar_width + 1)).clamp(1, 50) as usize;
    let bars_data = histogram(values, max_bars);

    let bars: Vec<Bar> = bars_data
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.count as u64)
                .label(Line::from(truncate_label(
                    &format_edge(b.lower),
                    bar_width as usize,
                )))
                .text_value(b.count.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(bordered(format!(" Distribution of {} ", feature)))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(chart, area);
}

/// Value-count bars for a categorical feature.
pub fn render_value_counts(
    frame: &mut Frame,
    area: Rect,
    feature: &str,
    counts: &[(String, usize)],
) {
    let bar_width = 9u16;
    let max_bars = ((area.width.saturating_sub(2)) / (bar_width + 1)).max(1) as usize;

    let bars: Vec<Bar> = counts
        .iter()
        .take(max_bars)
        .map(|(value, count)| {
            Bar::default()
                .value(*count as u64)
                .label(Line::from(truncate_label(value, bar_width as usize)))
                .text_value(count.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(bordered(format!(" Value Counts of {} ", feature)))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::Black).bg(Color::Magenta));

    frame.render_widget(chart, area);
}

/// Summary statistics table in describe() order.
pub fn render_describe_table(frame: &mut Frame, area: Rect, stats: &DescribeStats) {
    let rows = vec![
        stat_row("count", format!("{}", stats.count)),
        stat_row("mean", format_stat(stats.mean)),
        stat_row("std", format_stat(stats.std)),
        stat_row("min", format_stat(stats.min)),
        stat_row("25%", format_stat(stats.q25)),
        stat_row("50%", format_stat(stats.median)),
        stat_row("75%", format_stat(stats.q75)),
        stat_row("max", format_stat(stats.max)),
    ];

    let table = Table::new(rows, [Constraint::Length(8), Constraint::Min(12)])
        .block(bordered(" Summary Statistics ".to_string()))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn stat_row(name: &'static str, value: String) -> Row<'static> {
    Row::new(vec![
        Cell::from(name).style(Style::default().fg(Color::DarkGray)),
        Cell::from(value).style(Style::default().fg(Color::White)),
    ])
}

/// Event-rate bar chart. Bar height is the rate; the label above each bar
/// is the bin's row count, matching the companion table.
pub fn render_event_rate_chart(
    frame: &mut Frame,
    area: Rect,
    feature: &str,
    table: &EventRateTable,
) {
    let widest = table
        .rows
        .iter()
        .map(|r| r.bin.chars().count())
        .max()
        .unwrap_or(7);
    let bar_width = widest.clamp(6, 13) as u16;

    let bars: Vec<Bar> = table
        .rows
        .iter()
        .map(|row| {
            Bar::default()
                .value((row.event_rate * 1000.0).round() as u64)
                .label(Line::from(truncate_label(&row.bin, bar_width as usize)))
                .text_value(format!("n={}", row.count))
        })
        .collect();

    let chart = BarChart::default()
        .block(bordered(format!(
            " Event Rate by Bins for {} ({}) ",
            feature, table.strategy
        )))
        .data(BarGroup::default().bars(&bars))
        .max(1000)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Red))
        .value_style(Style::default().fg(Color::Black).bg(Color::Red));

    frame.render_widget(chart, area);
}

/// Companion table for the event-rate chart.
pub fn render_event_rate_table(frame: &mut Frame, area: Rect, table: &EventRateTable) {
    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.bin.clone()).style(Style::default().fg(Color::White)),
                Cell::from(format!("{:.4}", r.event_rate))
                    .style(Style::default().fg(Color::Red)),
                Cell::from(r.count.to_string()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Bin", "Event rate", "Count"])
        .style(Style::default().fg(Color::Cyan).bold());

    let widths = [
        Constraint::Min(14),
        Constraint::Length(10),
        Constraint::Length(8),
    ];
    let widget = Table::new(rows, widths)
        .header(header)
        .block(bordered(" Binned Event Rate Table ".to_string()))
        .column_spacing(1);

    frame.render_widget(widget, area);
}

/// Per-class distribution table shown under the boxplot.
pub fn render_class_stats_table(frame: &mut Frame, area: Rect, stats: &[ClassStats]) {
    let rows: Vec<Row> = stats
        .iter()
        .map(|s| {
            let color = class_color(s.class);
            Row::new(vec![
                Cell::from(s.class.to_string()).style(Style::default().fg(color).bold()),
                Cell::from(s.stats.count.to_string()),
                Cell::from(format_stat(s.stats.mean)),
                Cell::from(format_stat(s.stats.median)),
                Cell::from(format_stat(s.stats.std)),
                Cell::from(format_stat(s.stats.min)),
                Cell::from(format_stat(s.stats.max)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Class", "Count", "Mean", "Median", "Std", "Min", "Max"])
        .style(Style::default().fg(Color::Cyan).bold());

    let widths = [
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    let widget = Table::new(rows, widths)
        .header(header)
        .block(bordered(" Summary Stats by Target ".to_string()))
        .column_spacing(1);

    frame.render_widget(widget, area);
}

/// Boxplot per target class: IQR box, median line, 1.5×IQR whiskers
/// clipped to the observed range.
pub fn render_boxplot(
    frame: &mut Frame,
    area: Rect,
    feature: &str,
    target: &str,
    stats: &[ClassStats],
) {
    let all_min = stats
        .iter()
        .map(|s| s.stats.min)
        .fold(f64::INFINITY, f64::min);
    let all_max = stats
        .iter()
        .map(|s| s.stats.max)
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = ((all_max - all_min).abs() * 0.1).max(0.5);

    let canvas = Canvas::default()
        .block(bordered(format!(
            " Distribution of {} by {} ",
            feature, target
        )))
        .x_bounds([-0.7, 1.7])
        .y_bounds([all_min - pad, all_max + pad])
        .paint(|ctx| {
            for s in stats {
                let cx = s.class as f64;
                let color = class_color(s.class);
                let iqr = s.stats.q75 - s.stats.q25;
                let lo = (s.stats.q25 - 1.5 * iqr).max(s.stats.min);
                let hi = (s.stats.q75 + 1.5 * iqr).min(s.stats.max);

                ctx.draw(&CanvasLine {
                    x1: cx,
                    y1: lo,
                    x2: cx,
                    y2: s.stats.q25,
                    color,
                });
                ctx.draw(&CanvasLine {
                    x1: cx,
                    y1: s.stats.q75,
                    x2: cx,
                    y2: hi,
                    color,
                });
                ctx.draw(&CanvasLine {
                    x1: cx - 0.1,
                    y1: lo,
                    x2: cx + 0.1,
                    y2: lo,
                    color,
                });
                ctx.draw(&CanvasLine {
                    x1: cx - 0.1,
                    y1: hi,
                    x2: cx + 0.1,
                    y2: hi,
                    color,
                });
                ctx.draw(&Rectangle {
                    x: cx - 0.25,
                    y: s.stats.q25,
                    width: 0.5,
                    height: iqr,
                    color,
                });
                ctx.draw(&CanvasLine {
                    x1: cx - 0.25,
                    y1: s.stats.median,
                    x2: cx + 0.25,
                    y2: s.stats.median,
                    color: Color::White,
                });
                ctx.print(
                    cx - 0.05,
                    all_min - pad * 0.5,
                    Line::styled(s.class.to_string(), Style::default().fg(color).bold()),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// Per-class mean bars for the profiling page. Bars are scaled to the
/// largest absolute mean so negative means still show a magnitude.
pub fn render_class_means(frame: &mut Frame, area: Rect, feature: &str, means: &[(i32, f64)]) {
    let max_abs = means
        .iter()
        .map(|(_, m)| m.abs())
        .fold(0.0f64, f64::max)
        .max(f64::MIN_POSITIVE);

    let bars: Vec<Bar> = means
        .iter()
        .map(|(class, mean)| {
            let color = class_color(*class);
            Bar::default()
                .value(((mean.abs() / max_abs) * 100.0).round() as u64)
                .label(Line::from(format!("Class {}", class)))
                .text_value(format_stat(*mean))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(bordered(format!(" Average {} by Target Class ", feature)))
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_width(9)
        .bar_gap(3);

    frame.render_widget(chart, area);
}

/// Mean-per-class companion table.
pub fn render_class_means_table(frame: &mut Frame, area: Rect, means: &[(i32, f64)]) {
    let rows: Vec<Row> = means
        .iter()
        .map(|(class, mean)| {
            Row::new(vec![
                Cell::from(class.to_string())
                    .style(Style::default().fg(class_color(*class)).bold()),
                Cell::from(format_stat(*mean)),
            ])
        })
        .collect();

    let header =
        Row::new(vec!["Class", "Average Value"]).style(Style::default().fg(Color::Cyan).bold());

    let widget = Table::new(rows, [Constraint::Length(5), Constraint::Min(12)])
        .header(header)
        .block(bordered(" Average Value by Class ".to_string()))
        .column_spacing(1);

    frame.render_widget(widget, area);
}

fn excluded_classes_note(target: &str, excluded: usize) -> String {
    if excluded == 1 {
        format!("1 row where {} is neither 0 nor 1 is not shown", target)
    } else {
        format!(
            "{} rows where {} is neither 0 nor 1 are not shown",
            excluded, target
        )
    }
}

/// One-line notice under class plots when the target holds values beyond
/// 0/1. Those rows are dropped from the class split, which would otherwise
/// be invisible.
pub fn render_excluded_classes_note(
    frame: &mut Frame,
    area: Rect,
    target: &str,
    excluded: usize,
) {
    let line = Line::from(vec![
        Span::styled("  ⚠ ", Style::default().fg(Color::Yellow).bold()),
        Span::styled(
            excluded_classes_note(target, excluded),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Correlation heatmap as a table of colored cells, blue for negative and
/// red for positive, with the coefficient printed in each cell.
pub fn render_correlation_heatmap(
    frame: &mut Frame,
    area: Rect,
    matrix: &CorrelationMatrix,
    scroll: &mut u16,
) {
    let n = matrix.columns.len();

    let visible_rows = (area.height as usize).saturating_sub(4);
    let max_scroll = n.saturating_sub(visible_rows) as u16;
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }
    let skip = *scroll as usize;

    let mut header_cells = vec![Cell::from("")];
    for name in &matrix.columns {
        header_cells.push(
            Cell::from(truncate_label(name, 6)).style(Style::default().fg(Color::Cyan).bold()),
        );
    }
    let header = Row::new(header_cells);

    let rows: Vec<Row> = matrix
        .values
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible_rows)
        .map(|(i, row_values)| {
            let mut cells = vec![Cell::from(truncate_label(&matrix.columns[i], 13))
                .style(Style::default().fg(Color::Cyan))];
            for &r in row_values {
                cells.push(heat_cell(r));
            }
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(14)];
    widths.extend(std::iter::repeat(Constraint::Length(6)).take(n));

    let widget = Table::new(rows, widths)
        .header(header)
        .block(bordered(" Correlation Heatmap ".to_string()))
        .column_spacing(1);

    frame.render_widget(widget, area);
}

fn heat_cell(r: f64) -> Cell<'static> {
    if !r.is_finite() {
        return Cell::from("  --").style(Style::default().fg(Color::DarkGray));
    }
    let t = r.clamp(-1.0, 1.0);
    let fade = (255.0 * (1.0 - t.abs())) as u8;
    let bg = if t >= 0.0 {
        Color::Rgb(255, fade, fade)
    } else {
        Color::Rgb(fade, fade, 255)
    };
    Cell::from(format!("{:+.2}", r)).style(Style::default().fg(Color::Black).bg(bg))
}

/// Dataset structure table for the overview page.
pub fn render_overview_table(
    frame: &mut Frame,
    area: Rect,
    columns: &[ColumnSummary],
    target: &str,
    scroll: &mut u16,
) {
    let visible_rows = (area.height as usize).saturating_sub(4);
    let max_scroll = columns.len().saturating_sub(visible_rows) as u16;
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }
    let skip = *scroll as usize;

    let rows: Vec<Row> = columns
        .iter()
        .skip(skip)
        .take(visible_rows)
        .map(|c| {
            let name_style = if c.name == target {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let missing_style = if c.missing_ratio > 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Row::new(vec![
                Cell::from(c.name.clone()).style(name_style),
                Cell::from(c.dtype.clone()).style(Style::default().fg(Color::Magenta)),
                Cell::from(c.kind.as_str()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format!("{:.1}%", c.missing_ratio * 100.0)).style(missing_style),
                Cell::from(c.distinct.to_string()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Column", "Type", "Kind", "Missing", "Distinct"])
        .style(Style::default().fg(Color::Cyan).bold());

    let widths = [
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(9),
    ];
    let widget = Table::new(rows, widths)
        .header(header)
        .block(bordered(" Dataset Structure ".to_string()))
        .column_spacing(1);

    frame.render_widget(widget, area);
}

/// One-line shape and memory summary above the overview table.
pub fn render_shape_line(frame: &mut Frame, area: Rect, rows: usize, cols: usize, memory_mb: f64) {
    let line = Line::from(vec![
        Span::styled("  Rows: ", Style::default().fg(Color::DarkGray)),
        Span::styled(rows.to_string(), Style::default().fg(Color::White)),
        Span::styled("   Columns: ", Style::default().fg(Color::DarkGray)),
        Span::styled(cols.to_string(), Style::default().fg(Color::White)),
        Span::styled("   Memory: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.2} MB", memory_mb),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn class_color(class: i32) -> Color {
    if class == 0 {
        Color::Cyan
    } else {
        Color::Red
    }
}

/// Compact numeric formatting for table cells and bar values.
pub fn format_stat(x: f64) -> String {
    if !x.is_finite() {
        return "--".to_string();
    }
    if x.abs() >= 1000.0 {
        format!("{:.0}", x)
    } else {
        format!("{:.2}", x)
    }
}

fn format_edge(x: f64) -> String {
    if x.abs() >= 1000.0 {
        format!("{:.0}", x)
    } else {
        format!("{:.1}", x)
    }
}

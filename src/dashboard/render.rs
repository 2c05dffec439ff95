//! Page rendering and the per-page error taxonomy
//!
//! Every page computes its content through a fallible view function. A failed
//! view renders as a message panel in the content area while the navigation,
//! sidebar and the other pages keep working.

use polars::prelude::PolarsError;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use thiserror::Error;

use crate::analysis::{
    class_means, class_stats, correlation_matrix, describe, event_rate_table, value_counts,
    ClassStats, CorrelationMatrix, DescribeStats, EventRateTable,
};
use crate::data::{extract_target, numeric_values, target_values, ColumnKind, Dataset};

use super::app::{App, FeaturePicker, Page, PlotKind, MAX_BINS, MIN_BINS};
use super::charts;

/// A page-scoped render failure. None of these tear the dashboard down.
#[derive(Debug, Error)]
pub enum PageError {
    /// The selected feature has no plottable values left after filtering
    #[error("No valid data to plot for {0}.")]
    NoData(String),
    /// A plot that needs a numeric feature got a categorical one
    #[error("Please select a numeric feature to analyze with these plot types.")]
    FeatureNotNumeric,
    /// The target cannot anchor class comparison plots
    #[error(
        "Target column '{0}' is not suitable for class comparison plots. \
         A binary or low-cardinality target is required."
    )]
    TargetNotComparable(String),
    #[error("No numerical features available to generate a correlation matrix.")]
    NoNumericColumns,
    #[error("No numerical features available for profiling after excluding the target column.")]
    NoProfilingFeatures,
    /// The dataset holds nothing but the target column
    #[error("No feature columns available besides the target.")]
    NoFeatures,
    /// An analysis step failed; the message carries the underlying cause
    #[error("Could not render this chart: {0}")]
    Analysis(String),
}

/// How a page failure is presented: soft data gaps as yellow warnings,
/// analysis failures as red errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl PageError {
    pub fn severity(&self) -> Severity {
        match self {
            PageError::Analysis(_) => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl From<PolarsError> for PageError {
    fn from(err: PolarsError) -> Self {
        PageError::Analysis(err.to_string())
    }
}

/// Draw one full frame: sidebar, active page, help line, and the feature
/// picker popup when it is open.
pub fn draw(frame: &mut Frame, dataset: &Dataset, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(1)])
        .split(outer[0]);

    draw_sidebar(frame, body[0], dataset, app);

    let content = body[1];
    match app.page {
        Page::Home => draw_home(frame, content, dataset),
        Page::DataOverview => draw_data_overview(frame, content, dataset, app),
        Page::Univariate => draw_univariate(frame, content, dataset, app),
        Page::Bivariates => draw_bivariates(frame, content, dataset, app),
        Page::CorrelationMatrix => draw_correlation(frame, content, dataset, app),
        Page::DefaulterProfiling => draw_profiling(frame, content, dataset, app),
    }

    draw_help_line(frame, outer[1], app);

    if let Some(picker) = &app.picker {
        draw_feature_picker(frame, picker);
    }
}

fn content_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).bold())
}

fn draw_sidebar(frame: &mut Frame, area: Rect, dataset: &Dataset, app: &App) {
    let block = content_block(" binsight ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Page::ALL.len() as u16),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| {
            let text = format!(" {}  {}", page.index() + 1, page.title());
            if *page == app.page {
                ListItem::new(text)
                    .style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
            } else {
                ListItem::new(text).style(Style::default().fg(Color::White))
            }
        })
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    frame.render_widget(Paragraph::new(sidebar_settings(dataset, app)), chunks[2]);
}

/// The settings block under the navigation list mirrors the controls that
/// apply to the active page.
fn sidebar_settings(dataset: &Dataset, app: &App) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let mut lines = vec![Line::styled(
        " Settings",
        Style::default().fg(Color::DarkGray).bold(),
    )];

    match app.page {
        Page::Univariate => lines.push(feature_line(app.selected_univariate(), label, value)),
        Page::Bivariates => {
            lines.push(feature_line(app.selected_bivariate(), label, value));
            lines.push(Line::from(vec![
                Span::styled(" Plot: ", label),
                Span::styled(app.plot_kind.label(), value),
            ]));
            let bins_style = if app.plot_kind == PlotKind::EventRate {
                value
            } else {
                label
            };
            lines.push(Line::from(vec![
                Span::styled(" Bins: ", label),
                Span::styled(app.bin_count.to_string(), bins_style),
            ]));
        }
        Page::DefaulterProfiling => {
            lines.push(feature_line(app.selected_profile(), label, value))
        }
        _ => lines.push(Line::from(vec![
            Span::styled(" Target: ", label),
            Span::styled(dataset.target.clone(), Style::default().fg(Color::Yellow)),
        ])),
    }
    lines
}

fn feature_line(feature: Option<&str>, label: Style, value: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Feature: ", label),
        Span::styled(feature.unwrap_or("(none)").to_string(), value),
    ])
}

fn draw_help_line(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let text = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(" Tab", key),
        Span::styled(" next page  ", text),
        Span::styled("1-6", key),
        Span::styled(" jump  ", text),
    ];
    if app.page.has_selector() {
        spans.push(Span::styled("Enter", key));
        spans.push(Span::styled(" pick feature  ", text));
        spans.push(Span::styled("↑/↓", key));
        spans.push(Span::styled(" cycle  ", text));
    }
    if matches!(app.page, Page::DataOverview | Page::CorrelationMatrix) {
        spans.push(Span::styled("↑/↓", key));
        spans.push(Span::styled(" scroll  ", text));
    }
    if app.page == Page::Bivariates {
        spans.push(Span::styled("Space", key));
        spans.push(Span::styled(" plot type  ", text));
        if app.plot_kind == PlotKind::EventRate {
            spans.push(Span::styled("←/→", key));
            spans.push(Span::styled(
                format!(" bins ({}-{})  ", MIN_BINS, MAX_BINS),
                text,
            ));
        }
    }
    spans.push(Span::styled("q", key));
    spans.push(Span::styled(" quit", text));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_home(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let (rows, cols) = dataset.shape();
    let summary = &dataset.target_summary;

    let event_rate_line = match summary.event_rate {
        Some(rate) => Line::from(vec![
            Span::styled("  Event rate ", label),
            Span::styled(
                format!(
                    "{:.2}%  ({} events / {} non-events)",
                    rate * 100.0,
                    summary.events,
                    summary.non_events
                ),
                value,
            ),
        ]),
        None => Line::from(vec![
            Span::styled("  Event rate ", label),
            Span::styled(
                "n/a (target is not a 0/1 binary column)",
                Style::default().fg(Color::Yellow),
            ),
        ]),
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "  Welcome to the binsight dashboard",
            Style::default().fg(Color::Cyan).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Dataset    ", label),
            Span::styled(dataset.source.display().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("  Shape      ", label),
            Span::styled(format!("{} rows x {} columns", rows, cols), value),
        ]),
        Line::from(vec![
            Span::styled("  Memory     ", label),
            Span::styled(format!("{:.2} MB", dataset.memory_mb), value),
        ]),
        Line::from(vec![
            Span::styled("  Target     ", label),
            Span::styled(dataset.target.clone(), Style::default().fg(Color::Yellow)),
        ]),
        event_rate_line,
        Line::from(""),
        Line::styled(
            "  Use the sidebar pages to explore the dataset.",
            Style::default().fg(Color::White),
        ),
        Line::styled(
            "  Tab cycles pages, 1-6 jumps, q quits.",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(content_block(" Home ")),
        area,
    );
}

fn draw_data_overview(frame: &mut Frame, area: Rect, dataset: &Dataset, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let (rows, cols) = dataset.shape();
    charts::render_shape_line(frame, chunks[0], rows, cols, dataset.memory_mb);
    charts::render_overview_table(
        frame,
        chunks[1],
        &dataset.columns,
        &dataset.target,
        &mut app.overview_scroll,
    );
}

enum UnivariateView {
    Numeric {
        stats: DescribeStats,
        values: Vec<Option<f64>>,
    },
    Categorical {
        counts: Vec<(String, usize)>,
    },
}

fn univariate_view(dataset: &Dataset, feature: &str) -> Result<UnivariateView, PageError> {
    let summary = dataset
        .column_summary(feature)
        .ok_or_else(|| PageError::NoData(feature.to_string()))?;

    match summary.kind {
        ColumnKind::Numeric => {
            let values = numeric_values(&dataset.df, feature)?;
            let stats =
                describe(&values).ok_or_else(|| PageError::NoData(feature.to_string()))?;
            Ok(UnivariateView::Numeric { stats, values })
        }
        ColumnKind::Categorical => {
            let counts = value_counts(dataset.df.column(feature)?)?;
            if counts.is_empty() {
                return Err(PageError::NoData(feature.to_string()));
            }
            Ok(UnivariateView::Categorical { counts })
        }
    }
}

fn draw_univariate(frame: &mut Frame, area: Rect, dataset: &Dataset, app: &mut App) {
    let Some(feature) = app.selected_univariate().map(str::to_string) else {
        return draw_page_error(frame, area, &PageError::NoFeatures);
    };

    match univariate_view(dataset, &feature) {
        Ok(UnivariateView::Numeric { stats, values }) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(8), Constraint::Length(10)])
                .split(area);
            charts::render_histogram(frame, chunks[0], &feature, &values);
            charts::render_describe_table(frame, chunks[1], &stats);
        }
        Ok(UnivariateView::Categorical { counts }) => {
            charts::render_value_counts(frame, area, &feature, &counts);
        }
        Err(err) => draw_page_error(frame, area, &err),
    }
}

enum BivariateView {
    Boxplot(Vec<ClassStats>),
    EventRate(EventRateTable),
}

fn bivariate_view(dataset: &Dataset, feature: &str, app: &App) -> Result<BivariateView, PageError> {
    if !dataset.target_summary.is_binary_like {
        return Err(PageError::TargetNotComparable(dataset.target.clone()));
    }

    let summary = dataset
        .column_summary(feature)
        .ok_or_else(|| PageError::NoData(feature.to_string()))?;
    if summary.kind != ColumnKind::Numeric {
        return Err(PageError::FeatureNotNumeric);
    }

    let values = numeric_values(&dataset.df, feature)?;
    match app.plot_kind {
        PlotKind::Boxplot => {
            let target = extract_target(&dataset.df, &dataset.target)?;
            let stats = class_stats(&values, &target);
            if stats.is_empty() {
                return Err(PageError::NoData(feature.to_string()));
            }
            Ok(BivariateView::Boxplot(stats))
        }
        PlotKind::EventRate => {
            let target = target_values(&dataset.df, &dataset.target)?;
            let table = event_rate_table(&values, &target, app.bin_count);
            if table.is_empty() {
                return Err(PageError::NoData(feature.to_string()));
            }
            Ok(BivariateView::EventRate(table))
        }
    }
}

fn draw_bivariates(frame: &mut Frame, area: Rect, dataset: &Dataset, app: &mut App) {
    let Some(feature) = app.selected_bivariate().map(str::to_string) else {
        return draw_page_error(frame, area, &PageError::NoFeatures);
    };

    match bivariate_view(dataset, &feature, app) {
        Ok(BivariateView::Boxplot(stats)) => {
            let skipped = dataset.target_summary.out_of_range;
            let table_height = stats.len() as u16 + 3;
            let mut constraints = vec![Constraint::Min(10), Constraint::Length(table_height)];
            if skipped > 0 {
                constraints.push(Constraint::Length(1));
            }
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(area);
            charts::render_boxplot(frame, chunks[0], &feature, &dataset.target, &stats);
            charts::render_class_stats_table(frame, chunks[1], &stats);
            if skipped > 0 {
                charts::render_excluded_classes_note(frame, chunks[2], &dataset.target, skipped);
            }
        }
        Ok(BivariateView::EventRate(table)) => {
            let table_height = (table.rows.len() as u16 + 3).min(13);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(10), Constraint::Length(table_height)])
                .split(area);
            charts::render_event_rate_chart(frame, chunks[0], &feature, &table);
            charts::render_event_rate_table(frame, chunks[1], &table);
        }
        Err(err) => draw_page_error(frame, area, &err),
    }
}

fn correlation_view(dataset: &Dataset) -> Result<CorrelationMatrix, PageError> {
    let matrix =
        correlation_matrix(&dataset.df).map_err(|err| PageError::Analysis(err.to_string()))?;
    if matrix.is_empty() {
        return Err(PageError::NoNumericColumns);
    }
    Ok(matrix)
}

fn draw_correlation(frame: &mut Frame, area: Rect, dataset: &Dataset, app: &mut App) {
    match correlation_view(dataset) {
        Ok(matrix) => {
            charts::render_correlation_heatmap(frame, area, &matrix, &mut app.correlation_scroll)
        }
        Err(err) => draw_page_error(frame, area, &err),
    }
}

fn profiling_view(dataset: &Dataset, feature: &str) -> Result<Vec<(i32, f64)>, PageError> {
    let values = numeric_values(&dataset.df, feature)?;
    let target = extract_target(&dataset.df, &dataset.target)?;
    let means = class_means(&values, &target);
    if means.is_empty() {
        return Err(PageError::NoData(feature.to_string()));
    }
    Ok(means)
}

fn draw_profiling(frame: &mut Frame, area: Rect, dataset: &Dataset, app: &mut App) {
    let Some(feature) = app.selected_profile().map(str::to_string) else {
        return draw_page_error(frame, area, &PageError::NoProfilingFeatures);
    };

    match profiling_view(dataset, &feature) {
        Ok(means) => {
            let skipped = dataset.target_summary.out_of_range;
            let table_height = means.len() as u16 + 3;
            let mut constraints = vec![Constraint::Min(8), Constraint::Length(table_height)];
            if skipped > 0 {
                constraints.push(Constraint::Length(1));
            }
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(area);
            charts::render_class_means(frame, chunks[0], &feature, &means);
            charts::render_class_means_table(frame, chunks[1], &means);
            if skipped > 0 {
                charts::render_excluded_classes_note(frame, chunks[2], &dataset.target, skipped);
            }
        }
        Err(err) => draw_page_error(frame, area, &err),
    }
}

/// Render a page failure in the content area. Warnings are yellow, analysis
/// errors red; either way navigation stays live.
fn draw_page_error(frame: &mut Frame, area: Rect, err: &PageError) {
    let (title, color, symbol) = match err.severity() {
        Severity::Warning => (" Warning ", Color::Yellow, "⚠ "),
        Severity::Error => (" Error ", Color::Red, "✗ "),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
        .title_style(Style::default().fg(color).bold());

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {}", symbol), Style::default().fg(color).bold()),
            Span::styled(err.to_string(), Style::default().fg(color)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_feature_picker(frame: &mut Frame, picker: &FeaturePicker) {
    let area = frame.area();
    let popup_width = 50.min(area.width.saturating_sub(4));
    let popup_height = 18.min(area.height.saturating_sub(4));
    let popup_area = Rect {
        x: (area.width.saturating_sub(popup_width)) / 2,
        y: (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Select Feature ")
        .title_style(Style::default().fg(Color::Magenta).bold());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Search ");
    let search_text = Line::from(vec![
        Span::styled(picker.search.as_str(), Style::default().fg(Color::White)),
        Span::styled("▌", Style::default().fg(Color::Magenta)),
    ]);
    frame.render_widget(Paragraph::new(search_text).block(search_block), chunks[0]);

    // Window the list so the selection stays visible
    let max_visible = chunks[1].height as usize;
    let start_idx = if max_visible > 0 && picker.selected >= max_visible {
        picker.selected - max_visible + 1
    } else {
        0
    };

    let items: Vec<ListItem> = picker
        .filtered
        .iter()
        .skip(start_idx)
        .take(max_visible)
        .map(|&item_idx| ListItem::new(format!(" {}", picker.items[item_idx])))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Magenta).bold());
    let mut list_state = ListState::default();
    if !picker.filtered.is_empty() {
        list_state.select(Some(picker.selected.saturating_sub(start_idx)));
    }
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let help = Line::from(vec![
        Span::styled(" type", Style::default().fg(Color::Cyan)),
        Span::styled(" filter  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(help), chunks[2]);

    let count = Paragraph::new(Line::styled(
        format!("{}/{} ", picker.filtered.len(), picker.items.len()),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(count, chunks[2]);
}

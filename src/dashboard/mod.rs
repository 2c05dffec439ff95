//! Interactive terminal dashboard
//!
//! Six pages behind a sidebar: home, data overview, univariate analysis,
//! bivariates against the target, a correlation heatmap, and defaulter
//! profiling. Input handling lives in a plain state machine ([`App`]) so the
//! key bindings can be tested without a terminal.

mod app;
mod charts;
mod render;

pub use app::{App, FeaturePicker, Page, PlotKind, MAX_BINS, MIN_BINS};
pub use render::{PageError, Severity};

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use crate::data::Dataset;

/// Run the dashboard until the user quits.
///
/// Owns the terminal for the duration: raw mode plus the alternate screen,
/// both restored before returning the loop's result.
pub fn run_dashboard(dataset: &Dataset, initial_bins: usize) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, dataset, initial_bins);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dataset: &Dataset,
    initial_bins: usize,
) -> Result<()> {
    let mut app = App::new(
        dataset.column_names(),
        dataset.feature_names(),
        dataset.numeric_feature_names(),
        initial_bins,
    );

    loop {
        terminal.draw(|frame| render::draw(frame, dataset, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

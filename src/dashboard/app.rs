//! Dashboard application state
//!
//! All state transitions live here as plain functions over `App`, with no
//! terminal involved, so the navigation logic is testable on its own.
//! Rendering consumes this state read-only in `render.rs`.

use crossterm::event::KeyCode;

/// Bounds for the event-rate bin slider
pub const MIN_BINS: usize = 2;
pub const MAX_BINS: usize = 10;

/// The six sidebar pages, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    DataOverview,
    Univariate,
    Bivariates,
    CorrelationMatrix,
    DefaulterProfiling,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::DataOverview,
        Page::Univariate,
        Page::Bivariates,
        Page::CorrelationMatrix,
        Page::DefaulterProfiling,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::DataOverview => "Data Overview",
            Page::Univariate => "Univariate Analysis",
            Page::Bivariates => "Bivariates",
            Page::CorrelationMatrix => "Correlation Matrix",
            Page::DefaulterProfiling => "Defaulter Profiling",
        }
    }

    pub fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    fn next(&self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    fn prev(&self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    /// Pages with a feature selector of their own.
    pub fn has_selector(&self) -> bool {
        matches!(
            self,
            Page::Univariate | Page::Bivariates | Page::DefaulterProfiling
        )
    }
}

/// Bivariate plot toggle. Boxplot is the default view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Boxplot,
    EventRate,
}

impl PlotKind {
    pub fn toggled(&self) -> PlotKind {
        match self {
            PlotKind::Boxplot => PlotKind::EventRate,
            PlotKind::EventRate => PlotKind::Boxplot,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlotKind::Boxplot => "Boxplot",
            PlotKind::EventRate => "Event Rate",
        }
    }
}

/// Popup feature selector with incremental search.
#[derive(Debug, Clone)]
pub struct FeaturePicker {
    pub search: String,
    pub items: Vec<String>,
    pub filtered: Vec<usize>,
    pub selected: usize,
}

impl FeaturePicker {
    pub fn new(items: Vec<String>) -> Self {
        let filtered: Vec<usize> = (0..items.len()).collect();
        Self {
            search: String::new(),
            items,
            filtered,
            selected: 0,
        }
    }

    /// Re-run the case-insensitive substring filter after a search edit.
    pub fn update_filtered(&mut self) {
        let search_lower = self.search.to_lowercase();
        self.filtered.clear();
        for (i, item) in self.items.iter().enumerate() {
            if item.to_lowercase().contains(&search_lower) {
                self.filtered.push(i);
            }
        }
        self.selected = 0;
    }

    /// Index into `items` of the highlighted entry.
    pub fn current(&self) -> Option<usize> {
        self.filtered.get(self.selected).copied()
    }
}

/// Dashboard state. The item lists for the three selector pages are
/// captured once at startup so key handling never touches the dataframe.
pub struct App {
    pub page: Page,
    pub plot_kind: PlotKind,
    pub bin_count: usize,
    pub univariate_idx: usize,
    pub bivariate_idx: usize,
    pub profile_idx: usize,
    pub overview_scroll: u16,
    pub correlation_scroll: u16,
    pub picker: Option<FeaturePicker>,
    pub should_quit: bool,
    univariate_items: Vec<String>,
    bivariate_items: Vec<String>,
    profile_items: Vec<String>,
}

impl App {
    pub fn new(
        columns: Vec<String>,
        features: Vec<String>,
        numeric_features: Vec<String>,
        initial_bins: usize,
    ) -> Self {
        Self {
            page: Page::Home,
            plot_kind: PlotKind::Boxplot,
            bin_count: initial_bins.clamp(MIN_BINS, MAX_BINS),
            univariate_idx: 0,
            bivariate_idx: 0,
            profile_idx: 0,
            overview_scroll: 0,
            correlation_scroll: 0,
            picker: None,
            should_quit: false,
            univariate_items: columns,
            bivariate_items: features,
            profile_items: numeric_features,
        }
    }

    pub fn selected_univariate(&self) -> Option<&str> {
        self.univariate_items.get(self.univariate_idx).map(String::as_str)
    }

    pub fn selected_bivariate(&self) -> Option<&str> {
        self.bivariate_items.get(self.bivariate_idx).map(String::as_str)
    }

    pub fn selected_profile(&self) -> Option<&str> {
        self.profile_items.get(self.profile_idx).map(String::as_str)
    }

    /// Apply one key press. Returns nothing; the caller checks
    /// `should_quit` after each event.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.picker.is_some() {
            self.handle_picker_key(code);
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.page = self.page.next();
            }
            KeyCode::BackTab => {
                self.page = self.page.prev();
            }
            KeyCode::Char(c @ '1'..='6') => {
                let idx = (c as usize) - ('1' as usize);
                self.page = Page::ALL[idx];
            }
            KeyCode::Enter | KeyCode::Char('f') | KeyCode::Char('F') => {
                if self.page.has_selector() {
                    self.open_picker();
                }
            }
            KeyCode::Char(' ') => {
                if self.page == Page::Bivariates {
                    self.plot_kind = self.plot_kind.toggled();
                }
            }
            KeyCode::Left => {
                if self.page == Page::Bivariates && self.plot_kind == PlotKind::EventRate {
                    self.bin_count = self.bin_count.saturating_sub(1).max(MIN_BINS);
                }
            }
            KeyCode::Right => {
                if self.page == Page::Bivariates && self.plot_kind == PlotKind::EventRate {
                    self.bin_count = (self.bin_count + 1).min(MAX_BINS);
                }
            }
            KeyCode::Up => self.move_selection_up(1),
            KeyCode::Down => self.move_selection_down(1),
            KeyCode::PageUp => self.move_selection_up(5),
            KeyCode::PageDown => self.move_selection_down(5),
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, code: KeyCode) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        match code {
            KeyCode::Enter => {
                let chosen = picker.current();
                self.picker = None;
                if let Some(item_idx) = chosen {
                    match self.page {
                        Page::Univariate => self.univariate_idx = item_idx,
                        Page::Bivariates => self.bivariate_idx = item_idx,
                        Page::DefaulterProfiling => self.profile_idx = item_idx,
                        _ => {}
                    }
                }
            }
            KeyCode::Esc => {
                self.picker = None;
            }
            KeyCode::Up => {
                if picker.selected > 0 {
                    picker.selected -= 1;
                }
            }
            KeyCode::Down => {
                if picker.selected + 1 < picker.filtered.len() {
                    picker.selected += 1;
                }
            }
            KeyCode::Backspace => {
                picker.search.pop();
                picker.update_filtered();
            }
            KeyCode::Char(c) => {
                picker.search.push(c);
                picker.update_filtered();
            }
            _ => {}
        }
    }

    fn open_picker(&mut self) {
        let items = match self.page {
            Page::Univariate => self.univariate_items.clone(),
            Page::Bivariates => self.bivariate_items.clone(),
            Page::DefaulterProfiling => self.profile_items.clone(),
            _ => return,
        };
        self.picker = Some(FeaturePicker::new(items));
    }

    fn move_selection_up(&mut self, step: usize) {
        match self.page {
            Page::Univariate => {
                self.univariate_idx = self.univariate_idx.saturating_sub(step);
            }
            Page::Bivariates => {
                self.bivariate_idx = self.bivariate_idx.saturating_sub(step);
            }
            Page::DefaulterProfiling => {
                self.profile_idx = self.profile_idx.saturating_sub(step);
            }
            Page::DataOverview => {
                self.overview_scroll = self.overview_scroll.saturating_sub(step as u16);
            }
            Page::CorrelationMatrix => {
                self.correlation_scroll = self.correlation_scroll.saturating_sub(step as u16);
            }
            Page::Home => {}
        }
    }

    fn move_selection_down(&mut self, step: usize) {
        match self.page {
            Page::Univariate => {
                self.univariate_idx =
                    clamped_step_down(self.univariate_idx, step, self.univariate_items.len());
            }
            Page::Bivariates => {
                self.bivariate_idx =
                    clamped_step_down(self.bivariate_idx, step, self.bivariate_items.len());
            }
            Page::DefaulterProfiling => {
                self.profile_idx =
                    clamped_step_down(self.profile_idx, step, self.profile_items.len());
            }
            Page::DataOverview => {
                self.overview_scroll = self.overview_scroll.saturating_add(step as u16);
            }
            Page::CorrelationMatrix => {
                self.correlation_scroll = self.correlation_scroll.saturating_add(step as u16);
            }
            Page::Home => {}
        }
    }
}

fn clamped_step_down(idx: usize, step: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (idx + step).min(len - 1)
}

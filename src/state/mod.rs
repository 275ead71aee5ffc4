// src/state/mod.rs
use std::path::PathBuf;

use crate::data::{Dataset, Row};

pub mod bar_window;
pub mod filter;
pub mod search;
pub mod selection;

use bar_window::BarState;
use filter::ActiveFilterState;
use search::SearchState;
use selection::SelectionSet;

/// Everything the dashboard shares across views, owned in one place and
/// mutated only through [`crate::input::command::DashboardEvent`].
/// Views read it; they never hold their own copies of the data.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub dataset: Dataset,
    pub dataset_path: Option<PathBuf>,

    pub filters: ActiveFilterState,
    pub selection: SelectionSet,
    pub bar: BarState,
    pub search: SearchState,

    // Indices into dataset.rows satisfying the active filters.
    working: Vec<usize>,

    pub load_error: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded dataset and reset every per-dataset
    /// control back to its defaults.
    pub fn set_dataset(&mut self, dataset: Dataset, path: Option<PathBuf>) {
        self.dataset = dataset;
        self.dataset_path = path;
        self.filters = ActiveFilterState::default();
        self.selection = SelectionSet::default();
        self.search = SearchState::default();
        self.load_error = None;
        self.refresh_working();
    }

    pub fn set_filters(&mut self, filters: ActiveFilterState) {
        self.filters = filters;
        self.refresh_working();
    }

    pub fn select(&mut self, row: Row) {
        if self.selection.add(row) {
            self.rebuild_bars();
        }
    }

    pub fn deselect(&mut self, name: &str) {
        if self.selection.remove(name) {
            self.rebuild_bars();
        }
    }

    pub fn working_rows(&self) -> impl Iterator<Item = &Row> {
        self.working.iter().map(|&i| &self.dataset.rows[i])
    }

    pub fn working_len(&self) -> usize {
        self.working.len()
    }

    pub fn working_is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Scatter axis domains `((x_min, x_max), (y_min, y_max))` over the
    /// working set: pay on x, the active tuition column on y, both
    /// anchored at 0. NaN fields are skipped.
    pub fn scatter_domains(&self) -> ((f64, f64), (f64, f64)) {
        let field = self.filters.tuition_field;
        let mut x_max = 0.0_f64;
        let mut y_max = 0.0_f64;
        for row in self.working_rows() {
            if row.early_career_pay > x_max {
                x_max = row.early_career_pay;
            }
            let tuition = field.tuition(row);
            if tuition > y_max {
                y_max = tuition;
            }
        }
        ((0.0, x_max), (0.0, y_max))
    }

    fn refresh_working(&mut self) {
        self.working = filter::apply(&self.dataset.rows, &self.filters);
        self.rebuild_bars();
    }

    /// Pinned schools override the bar chart's source; with nothing
    /// pinned it falls back to the currently filtered working set.
    fn rebuild_bars(&mut self) {
        if self.selection.is_empty() {
            let source: Vec<Row> = self.working_rows().cloned().collect();
            self.bar.rebuild(&source, self.filters.tuition_field);
        } else {
            self.bar.rebuild(self.selection.rows(), self.filters.tuition_field);
        }
    }
}

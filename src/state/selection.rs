// src/state/selection.rs
use crate::data::Row;

/// Schools the user has pinned by clicking chart marks. Insertion-order
/// significant (newest first), deduplicated by name. While non-empty it
/// overrides the bar chart's data source.
#[derive(Debug, Default)]
pub struct SelectionSet {
    rows: Vec<Row>,
}

impl SelectionSet {
    /// Pin a school at the front of the list. No-op if a row with the
    /// same name is already pinned; returns whether anything changed.
    pub fn add(&mut self, row: Row) -> bool {
        if self.contains(&row.name) {
            return false;
        }
        self.rows.insert(0, row);
        true
    }

    /// Unpin by name. No-op if absent; returns whether anything changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.name != name);
        self.rows.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

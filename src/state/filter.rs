// src/state/filter.rs
use crate::data::{Row, SizeBin, TuitionField};

/// Current values of every dashboard control that narrows the working
/// set. Mutated only by control changes; changing one dimension never
/// resets the others. The free-text search term lives in
/// [`crate::state::search`] because it is an emphasis overlay, not a
/// subset filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilterState {
    /// `None` is the `all` sentinel.
    pub state: Option<String>,
    pub tuition_field: TuitionField,
    /// Single-choice enrollment-size filter; `None` is `all`.
    pub size: Option<SizeBin>,
    /// Multi-select over size bins, OR within the set; empty means no
    /// category filter at all.
    pub categories: Vec<SizeBin>,
}

impl Default for ActiveFilterState {
    fn default() -> Self {
        Self {
            state: None,
            tuition_field: TuitionField::default(),
            size: None,
            categories: Vec::new(),
        }
    }
}

impl ActiveFilterState {
    /// AND across dimensions, OR within the category multi-select.
    pub fn matches(&self, row: &Row) -> bool {
        if let Some(state) = &self.state {
            if &row.state != state {
                return false;
            }
        }
        if let Some(size) = self.size {
            if row.enrollment_bin != size {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&row.enrollment_bin) {
            return false;
        }
        true
    }

    pub fn toggle_category(&mut self, bin: SizeBin) {
        if let Some(pos) = self.categories.iter().position(|c| *c == bin) {
            self.categories.remove(pos);
        } else {
            self.categories.push(bin);
        }
    }
}

/// Narrow `rows` to the indices satisfying every active predicate.
/// Pure: the input is never mutated and an over-constrained filter
/// simply yields an empty index list.
pub fn apply(rows: &[Row], filters: &ActiveFilterState) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| filters.matches(row))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{test_row, SchoolType};

    fn sample() -> Vec<Row> {
        let mut rows = vec![
            test_row("Alpha", "CA", 60_000.0, 20_000.0),
            test_row("Beta", "NY", 55_000.0, 40_000.0),
            test_row("Gamma", "CA", 70_000.0, 30_000.0),
        ];
        rows[1].enrollment_bin = SizeBin::Small;
        rows[1].school_type = SchoolType::Private;
        rows
    }

    #[test]
    fn default_filter_passes_everything() {
        let rows = sample();
        assert_eq!(apply(&rows, &ActiveFilterState::default()), vec![0, 1, 2]);
    }

    #[test]
    fn state_filter_keeps_only_matching_rows() {
        let rows = sample();
        let filters = ActiveFilterState {
            state: Some("CA".to_string()),
            ..Default::default()
        };
        let kept = apply(&rows, &filters);
        assert_eq!(kept, vec![0, 2]);
        assert!(kept.iter().all(|&i| rows[i].state == "CA"));
    }

    #[test]
    fn dimensions_combine_with_and() {
        let rows = sample();
        let filters = ActiveFilterState {
            state: Some("NY".to_string()),
            size: Some(SizeBin::Medium),
            ..Default::default()
        };
        // The only NY row is Small, so the intersection is empty.
        assert!(apply(&rows, &filters).is_empty());
    }

    #[test]
    fn empty_category_set_means_no_filter() {
        let rows = sample();
        let mut filters = ActiveFilterState::default();
        assert_eq!(apply(&rows, &filters).len(), 3);

        filters.toggle_category(SizeBin::Small);
        assert_eq!(apply(&rows, &filters), vec![1]);

        filters.toggle_category(SizeBin::Medium);
        assert_eq!(apply(&rows, &filters), vec![0, 1, 2]);

        // Toggling both back off restores the unfiltered view.
        filters.toggle_category(SizeBin::Small);
        filters.toggle_category(SizeBin::Medium);
        assert_eq!(apply(&rows, &filters).len(), 3);
    }

    #[test]
    fn apply_is_idempotent_and_fabricates_nothing() {
        let rows = sample();
        let filters = ActiveFilterState {
            size: Some(SizeBin::Medium),
            ..Default::default()
        };
        let first = apply(&rows, &filters);
        let second = apply(&rows, &filters);
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < rows.len()));
    }

    #[test]
    fn over_constrained_filter_yields_empty_not_error() {
        let rows = sample();
        let filters = ActiveFilterState {
            state: Some("TX".to_string()),
            ..Default::default()
        };
        assert!(apply(&rows, &filters).is_empty());
    }
}

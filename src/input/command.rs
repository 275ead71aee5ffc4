// src/input/command.rs
use crate::data::Row;
use crate::state::filter::ActiveFilterState;
use crate::state::DashboardState;

/// Everything the UI layer can ask of the dashboard, decoupled from
/// any particular widget toolkit. Views emit events; the controller
/// applies them between frames.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    FilterChanged(ActiveFilterState),
    RowSelected(Row),
    RowDeselected(String),
    WindowDragged { pixel_x: f32, track_width: f32 },
    SearchApplied(String),
    SearchCleared,
}

impl DashboardEvent {
    /// Total over well-formed rows: duplicate selections and absent
    /// removals are silent no-ops, out-of-range drags clamp.
    pub fn apply(self, state: &mut DashboardState) {
        match self {
            DashboardEvent::FilterChanged(filters) => state.set_filters(filters),
            DashboardEvent::RowSelected(row) => state.select(row),
            DashboardEvent::RowDeselected(name) => state.deselect(&name),
            DashboardEvent::WindowDragged { pixel_x, track_width } => {
                state.bar.drag_to(pixel_x, track_width)
            }
            DashboardEvent::SearchApplied(term) => state.search.apply(&term),
            DashboardEvent::SearchCleared => state.search.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{test_row, Dataset};
    use crate::state::search::Emphasis;

    fn dashboard() -> DashboardState {
        let rows = vec![
            test_row("Alpha", "CA", 50_000.0, 20_000.0),
            test_row("Beta", "NY", 80_000.0, 60_000.0),
        ];
        let mut state = DashboardState::new();
        state.set_dataset(Dataset::new(rows), None);
        state
    }

    fn state_filter(state: &str) -> ActiveFilterState {
        ActiveFilterState {
            state: Some(state.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn filter_change_narrows_both_views() {
        let mut state = dashboard();
        DashboardEvent::FilterChanged(state_filter("CA")).apply(&mut state);

        let names: Vec<&str> = state.working_rows().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha"]);
        let bars: Vec<&str> = state.bar.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(bars, vec!["Alpha"]);
    }

    #[test]
    fn clicking_a_mark_twice_pins_it_once() {
        let mut state = dashboard();
        let row = test_row("Alpha", "CA", 50_000.0, 20_000.0);
        DashboardEvent::RowSelected(row.clone()).apply(&mut state);
        DashboardEvent::RowSelected(row).apply(&mut state);

        assert_eq!(state.selection.len(), 1);
        let bars: Vec<&str> = state.bar.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(bars, vec!["Alpha"]);
    }

    #[test]
    fn unpinning_last_school_reverts_to_filtered_set_not_full_dataset() {
        let mut state = dashboard();
        DashboardEvent::FilterChanged(state_filter("NY")).apply(&mut state);
        DashboardEvent::RowSelected(test_row("Alpha", "CA", 50_000.0, 20_000.0)).apply(&mut state);

        // While pinned, the bar chart shows the pin, not the filter.
        let bars: Vec<&str> = state.bar.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(bars, vec!["Alpha"]);

        DashboardEvent::RowDeselected("Alpha".to_string()).apply(&mut state);
        let bars: Vec<&str> = state.bar.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(bars, vec!["Beta"]);
    }

    #[test]
    fn deselecting_unknown_name_is_a_noop() {
        let mut state = dashboard();
        DashboardEvent::RowDeselected("Nowhere".to_string()).apply(&mut state);
        assert!(state.selection.is_empty());
        assert_eq!(state.bar.ranked().len(), 2);
    }

    #[test]
    fn over_constrained_filter_empties_both_views_and_recovers() {
        let mut state = dashboard();
        DashboardEvent::FilterChanged(state_filter("TX")).apply(&mut state);
        assert!(state.working_is_empty());
        assert!(state.bar.visible().is_empty());

        DashboardEvent::FilterChanged(ActiveFilterState::default()).apply(&mut state);
        assert_eq!(state.working_len(), 2);
        assert_eq!(state.bar.visible().len(), 2);
    }

    #[test]
    fn tuition_column_swap_reranks_the_bars() {
        let mut state = dashboard();
        // Out-of-state gaps: Alpha 30k, Beta 20k. In-state gaps
        // (half tuition): Alpha 40k, Beta 50k.
        let bars: Vec<&str> = state.bar.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(bars, vec!["Alpha", "Beta"]);

        let filters = ActiveFilterState {
            tuition_field: crate::data::TuitionField::InState,
            ..Default::default()
        };
        DashboardEvent::FilterChanged(filters).apply(&mut state);
        let bars: Vec<&str> = state.bar.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(bars, vec!["Beta", "Alpha"]);
    }

    #[test]
    fn search_overlay_never_touches_the_working_set() {
        let mut state = dashboard();
        DashboardEvent::SearchApplied("alpha".to_string()).apply(&mut state);
        assert_eq!(state.working_len(), 2);
        assert_eq!(state.search.emphasis("Alpha"), Emphasis::Match);
        assert_eq!(state.search.emphasis("Beta"), Emphasis::Dimmed);

        DashboardEvent::SearchCleared.apply(&mut state);
        assert_eq!(state.search.emphasis("Beta"), Emphasis::Normal);
    }

    #[test]
    fn drag_on_short_ranking_stays_put() {
        let mut state = dashboard();
        DashboardEvent::WindowDragged { pixel_x: 500.0, track_width: 600.0 }.apply(&mut state);
        assert_eq!(state.bar.window().unwrap().range(), 0..2);
    }
}

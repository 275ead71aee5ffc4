// src/ui/controls.rs
use eframe::egui;

use crate::data::{SizeBin, TuitionField};
use crate::input::DashboardEvent;
use crate::state::DashboardState;

/// Filter dropdowns, category toggles and the search field. Edits go
/// into a scratch copy of the filter record; a single FilterChanged
/// event carries the whole record back to the controller so one change
/// never resets the other dimensions.
pub fn show_controls(
    ui: &mut egui::Ui,
    state: &DashboardState,
    search_input: &mut String,
    events: &mut Vec<DashboardEvent>,
) {
    let mut scratch = state.filters.clone();

    ui.horizontal_wrapped(|ui| {
        egui::ComboBox::from_label("State")
            .selected_text(scratch.state.clone().unwrap_or_else(|| "All".to_string()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut scratch.state, None, "All");
                for s in &state.dataset.states {
                    ui.selectable_value(&mut scratch.state, Some(s.clone()), s);
                }
            });

        egui::ComboBox::from_label("Tuition")
            .selected_text(scratch.tuition_field.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut scratch.tuition_field,
                    TuitionField::InState,
                    TuitionField::InState.label(),
                );
                ui.selectable_value(
                    &mut scratch.tuition_field,
                    TuitionField::OutOfState,
                    TuitionField::OutOfState.label(),
                );
            });

        egui::ComboBox::from_label("Size")
            .selected_text(
                scratch
                    .size
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| "All".to_string()),
            )
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut scratch.size, None, "All");
                for bin in SizeBin::ALL {
                    ui.selectable_value(&mut scratch.size, Some(bin), bin.to_string());
                }
            });

        ui.separator();

        ui.label("Categories:");
        for bin in SizeBin::ALL {
            let active = scratch.categories.contains(&bin);
            if ui.selectable_label(active, bin.to_string()).clicked() {
                scratch.toggle_category(bin);
            }
        }

        ui.separator();

        let response = ui.add(
            egui::TextEdit::singleline(search_input)
                .hint_text("Search school names, Enter to apply")
                .desired_width(220.0),
        );
        // Enter applies the term as an emphasis overlay; Escape clears
        // the field and the overlay no matter what has focus.
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            events.push(DashboardEvent::SearchApplied(search_input.clone()));
        }
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            search_input.clear();
            if state.search.is_active() {
                events.push(DashboardEvent::SearchCleared);
            }
        }
    });

    if scratch != state.filters {
        events.push(DashboardEvent::FilterChanged(scratch));
    }
}

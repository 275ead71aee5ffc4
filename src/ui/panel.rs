// src/ui/panel.rs
use eframe::egui;

use crate::data::{SchoolType, SizeBin};
use crate::input::DashboardEvent;
use crate::state::DashboardState;

/// Side panel: one card per pinned school (newest first) plus the
/// shape/color legend.
pub fn show_pinned_panel(
    ui: &mut egui::Ui,
    state: &DashboardState,
    events: &mut Vec<DashboardEvent>,
) {
    ui.heading("Pinned Schools");
    ui.add_space(4.0);

    if state.selection.is_empty() {
        ui.label("Click a mark in either chart to pin a school.");
    } else {
        let field = state.filters.tuition_field;
        egui::ScrollArea::vertical()
            .id_source("pinned_scroll")
            .max_height(ui.available_height() * 0.6)
            .show(ui, |ui| {
                for row in state.selection.rows() {
                    ui.group(|ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.strong(&row.name);
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui
                                    .button(egui::RichText::new("✕").color(egui::Color32::RED))
                                    .clicked()
                                {
                                    events.push(DashboardEvent::RowDeselected(row.name.clone()));
                                }
                            });
                        });
                        ui.label(format!("State: {}", row.state));
                        ui.label(format!(
                            "In-State Tuition: {}",
                            crate::ui::format_usd(row.in_state_total)
                        ));
                        ui.label(format!(
                            "Out-of-State Tuition: {}",
                            crate::ui::format_usd(row.out_of_state_total)
                        ));
                        ui.label(format!(
                            "Average Early Career Salary: {}",
                            crate::ui::format_usd(row.early_career_pay)
                        ));
                        ui.label(format!(
                            "(Salary - Tuition): {}",
                            crate::ui::format_usd(field.pay_gap(row))
                        ));
                        ui.label(format!("{}, {}", row.enrollment_bin, row.school_type));
                    });
                    ui.add_space(4.0);
                }
            });
    }

    ui.add_space(8.0);
    ui.separator();
    show_legend(ui);
}

fn show_legend(ui: &mut egui::Ui) {
    ui.heading("School Type");
    for school_type in SchoolType::ALL {
        let glyph = match school_type {
            SchoolType::Public => "■",
            SchoolType::Private => "▲",
        };
        ui.horizontal(|ui| {
            ui.label(glyph);
            ui.label(school_type.to_string());
        });
    }

    ui.add_space(4.0);
    ui.heading("School Size");
    for bin in SizeBin::ALL {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, crate::ui::size_color(bin));
            ui.label(bin.to_string());
        });
    }
}

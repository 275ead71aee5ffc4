// src/ui/scatter.rs
use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::data::{Row, SchoolType};
use crate::input::DashboardEvent;
use crate::state::search::Emphasis;
use crate::state::DashboardState;

pub fn show_scatter(
    ui: &mut egui::Ui,
    state: &DashboardState,
    height: f32,
    events: &mut Vec<DashboardEvent>,
) {
    if state.working_is_empty() {
        crate::ui::empty_notice(ui);
        return;
    }

    // Resolve the accessor once: domains, diagonal, annotations and
    // mark positions below all use this same column for the pass.
    let field = state.filters.tuition_field;
    let ((_, x_max), (_, y_max)) = state.scatter_domains();

    let marks: Vec<(&Row, [f64; 2])> = state
        .working_rows()
        .map(|row| {
            let x = row.early_career_pay + jitter(&row.name, x_max);
            (row, [x, field.tuition(row)])
        })
        .collect();

    ui.label(format!("Early Career Pay vs. {}", field.label()));

    let response = egui_plot::Plot::new("scatter")
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .include_x(0.0)
        .include_x(x_max * 1.02)
        .include_y(0.0)
        .include_y(y_max * 1.05)
        .show(ui, |plot_ui| {
            draw_break_even(plot_ui, x_max, y_max);

            for (row, pos) in &marks {
                let selected = state.selection.contains(&row.name);
                let emphasis = state.search.emphasis(&row.name);

                let mut color = crate::ui::size_color(row.enrollment_bin);
                if emphasis == Emphasis::Dimmed {
                    color = color.linear_multiply(0.2);
                }
                let shape = match row.school_type {
                    SchoolType::Public => egui_plot::MarkerShape::Square,
                    SchoolType::Private => egui_plot::MarkerShape::Up,
                };

                // Selected or search-matched marks get a dark outline
                // ring behind the fill.
                if selected || emphasis == Emphasis::Match {
                    plot_ui.points(
                        egui_plot::Points::new(vec![*pos])
                            .shape(shape)
                            .radius(6.5)
                            .filled(false)
                            .color(egui::Color32::BLACK),
                    );
                }
                plot_ui.points(
                    egui_plot::Points::new(vec![*pos])
                        .shape(shape)
                        .radius(4.5)
                        .filled(true)
                        .color(color),
                );
            }

            plot_ui.pointer_coordinate()
        });

    let pointer = response.inner;
    if response.response.clicked() {
        if let Some(pos) = pointer {
            if let Some(row) = nearest_mark(&marks, pos, x_max, y_max) {
                events.push(DashboardEvent::RowSelected(row.clone()));
            }
        }
    } else if response.response.hovered() {
        if let Some(pos) = pointer {
            if let Some(row) = nearest_mark(&marks, pos, x_max, y_max) {
                show_tooltip(ui.ctx(), state, row);
            }
        }
    }
}

fn draw_break_even(plot_ui: &mut egui_plot::PlotUi, x_max: f64, y_max: f64) {
    let reach = x_max.min(y_max);
    plot_ui.line(
        egui_plot::Line::new(vec![[0.0, 0.0], [reach, reach]])
            .color(egui::Color32::RED)
            .width(2.0)
            .style(egui_plot::LineStyle::Dashed { length: 8.0 }),
    );

    plot_ui.text(
        egui_plot::Text::new(
            egui_plot::PlotPoint::new(x_max * 0.02, y_max),
            egui::RichText::new("Least Favorable\nTuition is high, salary is low")
                .size(15.0)
                .color(egui::Color32::from_rgb(0xff, 0xa5, 0x00)),
        )
        .anchor(egui::Align2::LEFT_TOP),
    );
    plot_ui.text(
        egui_plot::Text::new(
            egui_plot::PlotPoint::new(x_max, y_max * 0.04),
            egui::RichText::new("Most Favorable\nTuition is low, salary is high")
                .size(15.0)
                .color(egui::Color32::from_rgb(0xff, 0xa5, 0x00)),
        )
        .anchor(egui::Align2::RIGHT_BOTTOM),
    );
    // Which side of the diagonal means what.
    plot_ui.text(
        egui_plot::Text::new(
            egui_plot::PlotPoint::new(x_max * 0.02, y_max * 0.7),
            egui::RichText::new("Above the line, expected\nsalary is less than tuition")
                .size(11.0)
                .color(egui::Color32::RED),
        )
        .anchor(egui::Align2::LEFT_TOP),
    );
}

/// Closest mark within a small normalized radius of the pointer, so a
/// click on empty plot space pins nothing.
fn nearest_mark<'a>(
    marks: &[(&'a Row, [f64; 2])],
    pointer: egui_plot::PlotPoint,
    x_max: f64,
    y_max: f64,
) -> Option<&'a Row> {
    let x_span = if x_max > 0.0 { x_max } else { 1.0 };
    let y_span = if y_max > 0.0 { y_max } else { 1.0 };

    let mut best: Option<(&Row, f64)> = None;
    for (row, pos) in marks {
        let dx = (pos[0] - pointer.x) / x_span;
        let dy = (pos[1] - pointer.y) / y_span;
        let dist = dx * dx + dy * dy;
        if dist.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((row, dist));
        }
    }
    best.filter(|(_, d)| *d < 0.0004).map(|(row, _)| row)
}

fn show_tooltip(ctx: &egui::Context, state: &DashboardState, row: &Row) {
    let field = state.filters.tuition_field;
    egui::show_tooltip_at_pointer(ctx, egui::Id::new("scatter_tooltip"), |ui| {
        ui.strong(&row.name);
        ui.label(egui::RichText::new(&row.state).italics());
        ui.label(format!(
            "In state tuition: {}, Out of state tuition: {}",
            crate::ui::format_usd(row.in_state_total),
            crate::ui::format_usd(row.out_of_state_total),
        ));
        ui.label(format!(
            "Average early career salary: {}",
            crate::ui::format_usd(row.early_career_pay)
        ));
        ui.label(format!(
            "(Salary - Tuition): {}",
            crate::ui::format_usd(field.pay_gap(row))
        ));
        ui.label(format!("{}, {} University", row.enrollment_bin, row.school_type));
    });
}

/// Small horizontal offset so coincident marks stay distinguishable.
/// Seeded from the school name, so a mark keeps its jitter across
/// frames and re-renders instead of shimmering.
fn jitter(name: &str, x_max: f64) -> f64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());
    rng.gen_range(-0.005..0.005) * x_max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_is_stable_per_name() {
        assert_eq!(jitter("Alpha", 80_000.0), jitter("Alpha", 80_000.0));
    }

    #[test]
    fn nearest_mark_ignores_far_pointer() {
        let row = crate::data::test_row("A", "CA", 50_000.0, 20_000.0);
        let marks = vec![(&row, [50_000.0, 20_000.0])];
        let hit = nearest_mark(&marks, egui_plot::PlotPoint::new(50_100.0, 20_100.0), 80_000.0, 60_000.0);
        assert!(hit.is_some());
        let miss = nearest_mark(&marks, egui_plot::PlotPoint::new(10_000.0, 55_000.0), 80_000.0, 60_000.0);
        assert!(miss.is_none());
    }
}

// src/ui/bars.rs
use eframe::egui;

use crate::input::DashboardEvent;
use crate::state::search::Emphasis;
use crate::state::DashboardState;

/// Ranked pay-gap bar chart: the windowed slice as full-size bars, a
/// painter-drawn overview strip of the whole ranking underneath, and a
/// draggable mover panning the window across it.
pub fn show_bars(
    ui: &mut egui::Ui,
    state: &DashboardState,
    height: f32,
    events: &mut Vec<DashboardEvent>,
) {
    if state.bar.ranked().is_empty() {
        crate::ui::empty_notice(ui);
        return;
    }

    let field = state.filters.tuition_field;
    let (domain_min, domain_max) = state.bar.value_domain(field);
    let visible = state.bar.visible();

    ui.label(format!(
        "Top schools by Salary − {} ({} of {} shown)",
        field.label(),
        visible.len(),
        state.bar.ranked().len(),
    ));

    let names: Vec<String> = visible.iter().map(|r| r.name.clone()).collect();

    let response = egui_plot::Plot::new("bars")
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .x_axis_formatter(move |x, _max_chars, _range| bar_name_label(&names, x))
        .y_axis_formatter(|y, _max_chars, _range| currency_k_label(y))
        .include_y(domain_min)
        .include_y(domain_max * 1.05)
        .include_x(-0.6)
        .include_x(visible.len() as f64 - 0.4)
        .show(ui, |plot_ui| {
            let mut bars = Vec::with_capacity(visible.len());
            for (i, row) in visible.iter().enumerate() {
                let mut color = crate::ui::size_color(row.enrollment_bin);
                if state.search.emphasis(&row.name) == Emphasis::Dimmed {
                    color = color.linear_multiply(0.2);
                }
                let stroke = if state.selection.contains(&row.name) {
                    egui::Stroke::new(2.0, egui::Color32::BLACK)
                } else {
                    egui::Stroke::NONE
                };
                bars.push(
                    egui_plot::Bar::new(i as f64, field.pay_gap(row))
                        .name(&row.name)
                        .width(0.8)
                        .fill(color)
                        .stroke(stroke),
                );
            }
            plot_ui.bar_chart(egui_plot::BarChart::new(bars));

            // Baseline at 0; the domain clamp guarantees it is on-screen.
            plot_ui.hline(
                egui_plot::HLine::new(0.0)
                    .color(egui::Color32::BLACK)
                    .width(1.0)
                    .style(egui_plot::LineStyle::Dashed { length: 4.0 }),
            );

            plot_ui.pointer_coordinate()
        });

    let pointer = response.inner;
    let hovered_bar = pointer.and_then(|pos| {
        let idx = pos.x.round();
        if idx >= 0.0 && (idx as usize) < visible.len() && (pos.x - idx).abs() <= 0.4 {
            Some(idx as usize)
        } else {
            None
        }
    });

    if response.response.clicked() {
        if let Some(i) = hovered_bar {
            events.push(DashboardEvent::RowSelected(visible[i].clone()));
        }
    } else if response.response.hovered() {
        if let Some(i) = hovered_bar {
            let row = &visible[i];
            egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("bar_tooltip"), |ui| {
                ui.strong(&row.name);
                ui.label(format!(
                    "Salary-Tuition Disparity: ${:.1}k",
                    field.pay_gap(row) / 1000.0
                ));
            });
        }
    }

    show_overview(ui, state, events);
}

/// X tick label: the school name at integer marks carrying a visible
/// bar, blank everywhere else so fractional grid marks stay unlabeled.
fn bar_name_label(names: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 0.05 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

/// Value ticks in `$Nk` currency style.
fn currency_k_label(value: f64) -> String {
    format!("${}k", value / 1000.0)
}

/// Mini strip of the full ranking with the semi-transparent mover on
/// top. Dragging maps the pointer's track position straight to a
/// window start index; each move event recomputes from scratch.
fn show_overview(ui: &mut egui::Ui, state: &DashboardState, events: &mut Vec<DashboardEvent>) {
    let field = state.filters.tuition_field;
    let full = state.bar.ranked();
    let (domain_min, domain_max) = state.bar.value_domain(field);

    let (response, painter) = ui.allocate_painter(
        egui::vec2(ui.available_width(), 52.0),
        egui::Sense::click_and_drag(),
    );
    let rect = response.rect;
    painter.rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);

    let span = domain_max - domain_min;
    if span > 0.0 {
        let y_of = |value: f64| {
            rect.bottom() - ((value - domain_min) / span) as f32 * rect.height()
        };
        let zero_y = y_of(0.0);
        let band = rect.width() / full.len() as f32;
        for (i, row) in full.iter().enumerate() {
            let gap = field.pay_gap(row);
            if gap.is_nan() {
                continue;
            }
            let y = y_of(gap);
            let bar = egui::Rect::from_min_max(
                egui::pos2(rect.left() + i as f32 * band + band * 0.15, y.min(zero_y)),
                egui::pos2(rect.left() + (i + 1) as f32 * band - band * 0.15, y.max(zero_y)),
            );
            painter.rect_filled(bar, 0.0, egui::Color32::from_gray(0x99));
        }
    }

    if let Some(window) = state.bar.window() {
        let (offset, width) = window.mover_fractions();
        let mover = egui::Rect::from_min_size(
            egui::pos2(rect.left() + offset * rect.width(), rect.top()),
            egui::vec2(width * rect.width(), rect.height()),
        );
        painter.rect_filled(mover, 2.0, egui::Color32::from_rgba_unmultiplied(200, 200, 200, 110));

        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                // Keep the mover centered under the pointer; clamping
                // to the ranked sequence happens in the window math.
                let pixel_x = pos.x - rect.left() - mover.width() / 2.0;
                events.push(DashboardEvent::WindowDragged {
                    pixel_x,
                    track_width: rect.width(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_marks_label_their_school() {
        let names = vec!["Alpha University".to_string(), "Beta College".to_string()];
        assert_eq!(bar_name_label(&names, 0.0), "Alpha University");
        assert_eq!(bar_name_label(&names, 1.02), "Beta College");
        // Fractional grid marks and positions outside the window stay
        // blank.
        assert_eq!(bar_name_label(&names, 0.5), "");
        assert_eq!(bar_name_label(&names, -1.0), "");
        assert_eq!(bar_name_label(&names, 5.0), "");
    }

    #[test]
    fn value_ticks_use_currency_k_style() {
        assert_eq!(currency_k_label(60_000.0), "$60k");
        assert_eq!(currency_k_label(62_500.0), "$62.5k");
        assert_eq!(currency_k_label(0.0), "$0k");
        assert_eq!(currency_k_label(-5_000.0), "$-5k");
    }
}

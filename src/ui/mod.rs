// src/ui/mod.rs
use eframe::egui;

use crate::data::SizeBin;

pub mod bars;
pub mod controls;
pub mod panel;
pub mod scatter;

/// Enrollment-size color ramp shared by both charts and the legend.
pub fn size_color(bin: SizeBin) -> egui::Color32 {
    match bin {
        SizeBin::Small => egui::Color32::from_rgb(0xa8, 0xe6, 0xa3),
        SizeBin::Medium => egui::Color32::from_rgb(0x4c, 0xaf, 0x50),
        SizeBin::Large => egui::Color32::from_rgb(0x1b, 0x5e, 0x20),
    }
}

/// Single "no data" indicator both charts fall back to when the
/// working set is empty. Rendering it replaces mark binding entirely
/// for that pass.
pub fn empty_notice(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.colored_label(
            egui::Color32::RED,
            "No data matches your filter.  Please try a different search.",
        );
    });
}

/// Dollar formatting with thousands separators; NaN from upstream
/// coercion failures renders as a dash instead of propagating garbage.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

// src/app.rs
use eframe::egui;
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::error;

use crate::data::loader;
use crate::input::DashboardEvent;
use crate::state::DashboardState;
use crate::ui;

pub struct CostscopeApp {
    state: DashboardState,
    search_input: String,
    error_message: Option<String>,
}

impl CostscopeApp {
    pub fn new(dataset_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            state: DashboardState::new(),
            search_input: String::new(),
            error_message: None,
        };
        if let Some(path) = dataset_path {
            app.load_dataset(path);
        }
        app
    }

    fn load_dataset(&mut self, path: PathBuf) {
        match loader::load_dataset(&path) {
            Ok(dataset) => {
                self.state.set_dataset(dataset, Some(path));
                self.search_input.clear();
            }
            Err(e) => {
                error!("failed to load dataset: {e:#}");
                if self.state.dataset.rows.is_empty() {
                    // Nothing was ever rendered; stay behind the error
                    // notice instead of showing a partial dashboard.
                    self.state.load_error = Some(format!("{e:#}"));
                } else {
                    self.error_message = Some(format!("{e:#}"));
                }
            }
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Dataset...").clicked() {
                    self.open_dataset();
                    ui.close_menu();
                }
            });

            if let Some(path) = &self.state.dataset_path {
                ui.separator();
                ui.label(format!(
                    "{} — {} schools",
                    path.display(),
                    self.state.dataset.rows.len()
                ));
            }
        });
    }

    fn open_dataset(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_title("Open Dataset");

        if let Some(path) = file_dialog.pick_file() {
            self.load_dataset(path);
        }
    }
}

impl eframe::App for CostscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        if let Some(err) = self.state.load_error.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.colored_label(egui::Color32::RED, format!("Failed to load dataset: {err}"));
                });
            });
            return;
        }
        if self.state.dataset.rows.is_empty() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("Open a dataset to begin (File → Open Dataset...)");
                });
            });
            return;
        }

        // Views only read state and emit events; everything is applied
        // in one place at the end of the frame, so the next frame
        // observes a fully consistent state.
        let mut events: Vec<DashboardEvent> = Vec::new();

        egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
            ui::controls::show_controls(ui, &self.state, &mut self.search_input, &mut events);
        });

        egui::SidePanel::right("pinned_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui::panel::show_pinned_panel(ui, &self.state, &mut events);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_height();
            ui::scatter::show_scatter(ui, &self.state, available * 0.55, &mut events);
            ui.separator();
            ui::bars::show_bars(ui, &self.state, available * 0.28, &mut events);
        });

        // Show error modal if needed
        let error_msg = self.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        for event in events {
            event.apply(&mut self.state);
        }
    }
}

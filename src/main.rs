// src/main.rs
use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod data;
mod input;
mod state;
mod ui;

use app::CostscopeApp;

const DEFAULT_DATASET: &str = "data/final_data_bins.csv";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // An explicit path argument is always attempted (a bad one surfaces
    // as a load failure); the default dataset only when it exists.
    let dataset_path = match std::env::args().nth(1) {
        Some(arg) => Some(PathBuf::from(arg)),
        None => {
            let default = PathBuf::from(DEFAULT_DATASET);
            default.exists().then_some(default)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Costscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Costscope",
        options,
        Box::new(move |_cc| Box::new(CostscopeApp::new(dataset_path))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

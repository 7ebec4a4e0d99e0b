mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod table;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use app::PokedashApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // No window without a table.
    let dataset = data::loader::load_csv(&config.csv_path)
        .with_context(|| format!("loading dataset {}", config.csv_path.display()))
        .inspect_err(|e| log::error!("{e:#}"))?;
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            // Installs the http loader the logo needs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PokedashApp::new(dataset, &config)))
        }),
    )
    .map_err(|e| anyhow!("eframe: {e}"))
}

use std::sync::Arc;

use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PokedashApp {
    pub state: AppState,
}

impl PokedashApp {
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        Self {
            state: AppState::new(dataset, config.initial_type),
        }
    }
}

impl eframe::App for PokedashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: logo ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: type filter + dropdown ----
        let event = egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| panels::side_panel(ui, &self.state))
            .inner;

        // The whole chain settles before anything below reads the state.
        if let Some(event) = event {
            self.state.apply(event);
        }

        // ---- Central panel: charts + table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &self.state);
        });
    }
}

use std::path::PathBuf;

use crate::data::model::TypeTag;

/// Start-up settings. There are no flags; everything is fixed here and
/// log verbosity comes from `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Dataset location, relative to the working directory.
    pub csv_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Type selected when the window opens.
    pub initial_type: TypeTag,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("pokemondashtrue2.csv"),
            window_title: "Pokédash".to_string(),
            window_size: [1280.0, 860.0],
            min_window_size: [720.0, 480.0],
            initial_type: TypeTag::Grass,
        }
    }
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::ColorMap;
use crate::data::model::TypeTag;
use crate::state::{AppState, Event};
use crate::ui::pie::pie_chart;

const LOGO_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/9/98/\
International_Pok%C3%A9mon_logo.svg/1200px-International_Pok%C3%A9mon_logo.svg.png";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Logo and a one-line dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(LOGO_URL)
                .max_width(ui.available_width() * 0.5)
                .max_height(110.0),
        );
    });

    ui.horizontal(|ui: &mut Ui| {
        if state.dataset.is_empty() {
            ui.label(RichText::new("The dataset has no rows.").color(Color32::RED));
        } else {
            ui.label(format!(
                "{} Pokémon, {} types",
                state.dataset.len(),
                state.distribution_chart.slices.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – type filter and Pokémon dropdown
// ---------------------------------------------------------------------------

/// Render the filter controls. Returns the interaction, if any, for the
/// caller to apply once the frame's borrows are released.
pub fn side_panel(ui: &mut Ui, state: &AppState) -> Option<Event> {
    let mut event = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Choisissez le type de Pokémon à adopter :");
            ui.separator();

            let mut chosen_type = state.selected_type;
            for tag in TypeTag::ALL {
                ui.radio_value(&mut chosen_type, tag, tag.label());
            }
            if chosen_type != state.selected_type {
                event = Some(Event::TypeChanged(chosen_type));
            }

            ui.separator();
            ui.strong("Pokémon");

            let selected = state.selector.selected.as_deref();
            egui::ComboBox::from_id_salt("pokemon_dropdown")
                .selected_text(selected.unwrap_or("Select..."))
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for name in &state.selector.options {
                        if ui
                            .selectable_label(selected == Some(name.as_str()), name)
                            .clicked()
                        {
                            event = Some(Event::PokemonChosen(name.clone()));
                        }
                    }
                });
        });

    event
}

// ---------------------------------------------------------------------------
// Central panel – charts and the raw table
// ---------------------------------------------------------------------------

/// Stats pie on top; type distribution and the table dump side by side below.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let stats_colors = ColorMap::for_chart(&state.stats_chart);
    let height = (ui.available_height() * 0.45).max(200.0);

    pie_chart(ui, "pokemon_stats", &state.stats_chart, &stats_colors, height);
    ui.separator();

    ui.columns(2, |columns: &mut [Ui]| {
        pie_chart(
            &mut columns[0],
            "pokemon_types",
            &state.distribution_chart,
            &state.distribution_colors,
            height,
        );

        let ui = &mut columns[1];
        ui.heading("Dataframe des Pokémon");
        ScrollArea::both()
            .id_salt("pokemon_dataframe")
            .max_height(300.0)
            .show(ui, |ui: &mut Ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut state.table_text.as_str())
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
    });
}

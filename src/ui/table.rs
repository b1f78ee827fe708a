use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::SampleOutcome;
use crate::data::model::DISPLAY_COLUMNS;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Count + random sample
// ---------------------------------------------------------------------------

/// Match count and the "Surprise me" sample.
pub fn summary(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(format!("Planets Found: {}", state.visible_count()));
        ui.add_space(16.0);
        if ui.button("🎲 Surprise Me").clicked() {
            state.surprise_me();
        }
    });

    match state.sample {
        None => {}
        Some(SampleOutcome::NoMatch) => {
            ui.label(
                RichText::new("No planets match the filter criteria.")
                    .color(egui::Color32::LIGHT_BLUE),
            );
        }
        Some(SampleOutcome::Picked(_)) => {
            if let Some(planet) = state.sampled_planet() {
                let color = state.colors.color_for(planet.habitability);
                egui::Grid::new("sample_grid")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui: &mut Ui| {
                        for (label, value) in DISPLAY_COLUMNS.iter().zip(planet.cells()) {
                            ui.strong(*label);
                            if *label == "Habitability" {
                                ui.label(RichText::new(value).color(color));
                            } else {
                                ui.label(value);
                            }
                            ui.end_row();
                        }
                    });
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// The filtered planets, one row each.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    let Some(planets) = &state.planets else {
        return;
    };
    let visible = &state.visible_indices;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(180.0).at_least(80.0).clip(true))
        .columns(Column::auto().at_least(70.0), DISPLAY_COLUMNS.len() - 1)
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for label in DISPLAY_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(label);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, visible.len(), |mut row| {
                let planet = &planets[visible[row.index()]];
                let color = state.colors.color_for(planet.habitability);
                let last = DISPLAY_COLUMNS.len() - 1;
                for (i, cell) in planet.cells().into_iter().enumerate() {
                    row.col(|ui: &mut Ui| {
                        if i == last {
                            ui.label(RichText::new(cell).color(color));
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}

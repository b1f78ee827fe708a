use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{DISTANCE_BOUNDS, RADIUS_BOUNDS};
use crate::state::{AppState, NoticeLevel, ResultsView};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.planets.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let before = state.selection.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Radius range ----
            ui.strong("Planet Radius (Earth units)");
            range_sliders(
                ui,
                &mut state.selection.radius,
                (*RADIUS_BOUNDS.start(), *RADIUS_BOUNDS.end()),
            );
            ui.separator();

            // ---- Distance range ----
            ui.strong("Distance (light years)");
            range_sliders(
                ui,
                &mut state.selection.distance,
                (*DISTANCE_BOUNDS.start(), *DISTANCE_BOUNDS.end()),
            );
            ui.separator();

            // ---- Habitability multi-select ----
            let n_selected = state.selection.habitability.len();
            let n_total = state.classes.len();
            ui.strong(format!("Habitability  ({n_selected}/{n_total})"));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_classes();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_classes();
                }
            });

            let classes: Vec<_> = state.classes.iter().rev().copied().collect();
            for class in classes {
                let mut checked = state.selection.habitability.contains(&class);
                let text = RichText::new(class.label()).color(state.colors.color_for(class));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_class(class);
                }
            }
        });

    // Slider drags mutate the selection directly.
    if state.selection != before {
        state.refilter();
    }
}

/// Two sliders forming an inclusive `[lo, hi]` range within `bounds`.
fn range_sliders(ui: &mut Ui, range: &mut (f64, f64), bounds: (f64, f64)) {
    let hi = range.1;
    ui.add(egui::Slider::new(&mut range.0, bounds.0..=hi).text("min"));
    let lo = range.0;
    ui.add(egui::Slider::new(&mut range.1, lo..=bounds.1).text("max"));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload dataset").clicked() {
                state.run_pipeline();
                ui.close_menu();
            }
            if ui.button("Re-download dataset").clicked() {
                state.refresh_dataset();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(planets) = &state.planets {
            ui.label(format!(
                "{} planets loaded, {} visible",
                planets.len(),
                state.visible_count()
            ));
        }
        if let Some(path) = &state.dataset_path {
            ui.weak(path.display().to_string());
        }

        ui.separator();

        ui.selectable_value(&mut state.view, ResultsView::Table, "Table");
        ui.selectable_value(&mut state.view, ResultsView::Scatter, "Scatter");

        ui.separator();

        for (label, color) in state.colors.legend_entries() {
            ui.label(RichText::new(format!("● {label}")).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

/// Messages from the last fetch → load run.
pub fn notices(ui: &mut Ui, state: &AppState) {
    for notice in &state.notices {
        let color = match notice.level {
            NoticeLevel::Info => Color32::LIGHT_BLUE,
            NoticeLevel::Success => Color32::LIGHT_GREEN,
            NoticeLevel::Warning => Color32::YELLOW,
            NoticeLevel::Error => Color32::RED,
        };
        ui.label(RichText::new(&notice.text).color(color));
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open exoplanet data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.notices.clear();
        state.load_dataset(&path);
    }
}

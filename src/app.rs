use eframe::egui;

use crate::state::{AppState, ResultsView};
use crate::ui::{apod, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExoAtlasApp {
    pub state: AppState,
}

impl ExoAtlasApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ExoAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: APOD, notices, results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("ExoAtlas – Exoplanet Explorer & NASA's Astronomy Picture of the Day");
            apod::apod_section(ui, &mut self.state);
            ui.separator();
            ui.label(
                "Explore real NASA exoplanets and filter them based on size, temperature, \
                 and distance.",
            );
            panels::notices(ui, &self.state);

            if self.state.planets.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading(
                        "No dataset loaded  (File → Re-download dataset, or File → Open…)",
                    );
                });
                return;
            }

            table::summary(ui, &mut self.state);
            ui.separator();
            match self.state.view {
                ResultsView::Table => table::results_table(ui, &self.state),
                ResultsView::Scatter => plot::scatter_plot(ui, &self.state),
            }
        });
    }
}

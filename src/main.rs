mod apod;
mod app;
mod color;
mod config;
mod data;
mod error;
mod net;
mod state;
mod ui;

use anyhow::Context;
use app::ExoAtlasApp;
use config::AppConfig;
use eframe::egui;
use net::BlockingClient;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_environment();
    let client = BlockingClient::new().context("building HTTP client")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ExoAtlas – Exoplanet Explorer + APOD",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can fetch and decode the APOD image.
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut state = AppState::new(config, Box::new(client));
            state.fetch_image();
            state.run_pipeline();
            Ok(Box::new(ExoAtlasApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}

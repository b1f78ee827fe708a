use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, ImageState};

/// Collapsible Astronomy Picture of the Day section.
pub fn apod_section(ui: &mut Ui, state: &mut AppState) {
    egui::CollapsingHeader::new("🔭 Astronomy Picture of the Day")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            match &state.image {
                ImageState::NotFetched => {
                    ui.label("Not fetched yet.");
                }
                ImageState::Failed(msg) => {
                    ui.label(RichText::new(msg).color(Color32::YELLOW));
                }
                ImageState::Loaded(image) => {
                    ui.heading(&image.title);
                    ui.label(RichText::new(format!("Date: {}", image.date)).italics());

                    if image.is_video() {
                        ui.hyperlink_to("Watch today's video", &image.url);
                    } else if !image.url.is_empty() {
                        ui.add(
                            egui::Image::from_uri(image.url.clone())
                                .max_width(ui.available_width())
                                .max_height(480.0)
                                .shrink_to_fit(),
                        );
                    }
                    ui.label(&image.explanation);
                    if !image.copyright.is_empty() {
                        ui.small(format!("© {}", image.copyright.trim()));
                    }
                }
            }
            if ui.small_button("Refresh").clicked() {
                state.fetch_image();
            }
        });
}

use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::data::model::Habitability;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Radius vs distance scatter (central panel)
// ---------------------------------------------------------------------------

/// One point per visible planet, one series per habitability class.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let Some(planets) = &state.planets else {
        return;
    };

    Plot::new("radius_distance_plot")
        .legend(Legend::default())
        .x_axis_label("Distance (ly)")
        .y_axis_label("Radius (Earth)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for class in Habitability::ALL {
                let points: PlotPoints = state
                    .visible_indices
                    .iter()
                    .map(|&i| &planets[i])
                    .filter(|p| p.habitability == class)
                    .map(|p| [p.distance_ly, p.radius_earth])
                    .collect();

                let series = Points::new(points)
                    .name(class.label())
                    .color(state.colors.color_for(class))
                    .radius(3.0);

                plot_ui.points(series);
            }
        });
}

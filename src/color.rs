use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Habitability;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` colours with hues evenly spaced from `hue_start` to
/// `hue_end` (degrees, both inclusive).
pub fn generate_palette(n: usize, hue_start: f32, hue_end: f32) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![hsl_color(hue_start)],
        _ => (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                hsl_color(hue_start + t * (hue_end - hue_start))
            })
            .collect(),
    }
}

fn hsl_color(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Habitability → Color32
// ---------------------------------------------------------------------------

/// Red for Low through yellow to green for High.
#[derive(Debug, Clone)]
pub struct HabitabilityColors {
    colors: [Color32; 3],
}

impl Default for HabitabilityColors {
    fn default() -> Self {
        let palette = generate_palette(Habitability::ALL.len(), 0.0, 120.0);
        HabitabilityColors {
            colors: [palette[0], palette[1], palette[2]],
        }
    }
}

impl HabitabilityColors {
    pub fn color_for(&self, class: Habitability) -> Color32 {
        // Habitability::ALL is ordered Low, Medium, High.
        self.colors[class as usize]
    }

    /// Legend entries (label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(&'static str, Color32)> {
        Habitability::ALL
            .iter()
            .map(|&c| (c.label(), self.color_for(c)))
            .collect()
    }
}

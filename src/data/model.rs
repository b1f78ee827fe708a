use std::fmt;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Source columns of the archive export, in display order.
pub const SOURCE_COLUMNS: [&str; 6] =
    ["pl_name", "pl_rade", "pl_eqt", "st_teff", "st_rad", "sy_dist"];

/// Display labels for [`SOURCE_COLUMNS`] followed by the derived column.
pub const DISPLAY_COLUMNS: [&str; 7] = [
    "Planet Name",
    "Radius (Earth)",
    "Temp (K)",
    "Star Temp (K)",
    "Star Radius",
    "Distance (ly)",
    "Habitability",
];

// ---------------------------------------------------------------------------
// Habitability – derived per planet
// ---------------------------------------------------------------------------

/// Coarse habitability class derived from radius and equilibrium temperature.
/// Ordered Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Habitability {
    Low,
    Medium,
    High,
}

impl Habitability {
    pub const ALL: [Habitability; 3] =
        [Habitability::Low, Habitability::Medium, Habitability::High];

    /// Classify a planet.
    ///
    /// The High window is fully contained in the Medium temperature band, so
    /// the order of the checks is significant.
    pub fn classify(radius_earth: f64, temp_k: f64) -> Self {
        if (0.5..=2.5).contains(&radius_earth) && (200.0..=350.0).contains(&temp_k) {
            Habitability::High
        } else if (150.0..=500.0).contains(&temp_k) {
            Habitability::Medium
        } else {
            Habitability::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Habitability::High => "High",
            Habitability::Medium => "Medium",
            Habitability::Low => "Low",
        }
    }
}

impl fmt::Display for Habitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// PlanetRecord – one complete row of the dataset
// ---------------------------------------------------------------------------

/// A planet with all six source fields present.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRecord {
    pub name: String,
    pub radius_earth: f64,
    pub temp_k: f64,
    pub star_temp_k: f64,
    pub star_radius: f64,
    pub distance_ly: f64,
    pub habitability: Habitability,
}

impl PlanetRecord {
    /// Build a record, deriving its habitability.
    pub fn new(
        name: impl Into<String>,
        radius_earth: f64,
        temp_k: f64,
        star_temp_k: f64,
        star_radius: f64,
        distance_ly: f64,
    ) -> Self {
        PlanetRecord {
            name: name.into(),
            radius_earth,
            temp_k,
            star_temp_k,
            star_radius,
            distance_ly,
            habitability: Habitability::classify(radius_earth, temp_k),
        }
    }

    /// Cell texts in [`DISPLAY_COLUMNS`] order.
    pub fn cells(&self) -> [String; 7] {
        [
            self.name.clone(),
            format_number(self.radius_earth),
            format_number(self.temp_k),
            format_number(self.star_temp_k),
            format_number(self.star_radius),
            format_number(self.distance_ly),
            self.habitability.to_string(),
        ]
    }
}

/// Up to four decimals, trailing zeros dropped.
fn format_number(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_like_is_high() {
        assert_eq!(Habitability::classify(1.0, 300.0), Habitability::High);
    }

    #[test]
    fn high_window_boundaries_are_inclusive() {
        for (r, t) in [(0.5, 200.0), (0.5, 350.0), (2.5, 200.0), (2.5, 350.0)] {
            assert_eq!(Habitability::classify(r, t), Habitability::High, "r={r} t={t}");
        }
    }

    #[test]
    fn high_window_takes_precedence_over_medium_band() {
        // Every point in the High window also lies in the Medium band.
        let mut r = 0.5;
        while r <= 2.5 {
            let mut t = 200.0;
            while t <= 350.0 {
                assert_eq!(Habitability::classify(r, t), Habitability::High);
                t += 12.5;
            }
            r += 0.25;
        }
    }

    #[test]
    fn large_planet_in_temperate_band_is_medium() {
        assert_eq!(Habitability::classify(5.0, 300.0), Habitability::Medium);
        assert_eq!(Habitability::classify(0.3, 250.0), Habitability::Medium);
        assert_eq!(Habitability::classify(1.0, 150.0), Habitability::Medium);
        assert_eq!(Habitability::classify(1.0, 500.0), Habitability::Medium);
    }

    #[test]
    fn outside_both_is_low() {
        assert_eq!(Habitability::classify(8.0, 900.0), Habitability::Low);
        assert_eq!(Habitability::classify(1.0, 149.9), Habitability::Low);
        assert_eq!(Habitability::classify(1.0, 500.1), Habitability::Low);
        assert_eq!(Habitability::classify(f64::NAN, f64::NAN), Habitability::Low);
    }

    #[test]
    fn record_derives_habitability() {
        let p = PlanetRecord::new("Kepler-442 b", 1.34, 233.0, 4402.0, 0.6, 370.0);
        assert_eq!(p.habitability, Habitability::High);
        assert_eq!(p.cells()[0], "Kepler-442 b");
        assert_eq!(p.cells()[1], "1.34");
        assert_eq!(p.cells()[6], "High");
    }

    #[test]
    fn numbers_format_compactly() {
        assert_eq!(format_number(300.0), "300");
        assert_eq!(format_number(0.123456), "0.1235");
        assert_eq!(format_number(-0.00001), "0");
    }
}

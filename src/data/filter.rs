use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

use super::model::{Habitability, PlanetRecord};

/// Slider limits for the radius selector (Earth radii).
pub const RADIUS_BOUNDS: RangeInclusive<f64> = 0.1..=10.0;
/// Slider limits for the distance selector (light years).
pub const DISTANCE_BOUNDS: RangeInclusive<f64> = 0.0..=5000.0;

// ---------------------------------------------------------------------------
// Filter selection
// ---------------------------------------------------------------------------

/// The user's current filter: two inclusive ranges and a set of accepted
/// habitability classes. All three must hold for a planet to pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub radius: (f64, f64),
    pub distance: (f64, f64),
    pub habitability: BTreeSet<Habitability>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            radius: (0.5, 2.5),
            distance: (0.0, 500.0),
            habitability: Habitability::ALL.into_iter().collect(),
        }
    }
}

impl FilterSelection {
    /// Default ranges with every class present in `planets` selected.
    pub fn for_dataset(planets: &[PlanetRecord]) -> Self {
        Self {
            habitability: present_classes(planets),
            ..Self::default()
        }
    }

    pub fn accepts(&self, planet: &PlanetRecord) -> bool {
        in_range(planet.radius_earth, self.radius)
            && in_range(planet.distance_ly, self.distance)
            && self.habitability.contains(&planet.habitability)
    }

    pub fn toggle(&mut self, class: Habitability) {
        if !self.habitability.remove(&class) {
            self.habitability.insert(class);
        }
    }
}

fn in_range(v: f64, (lo, hi): (f64, f64)) -> bool {
    lo <= v && v <= hi
}

/// Classes that occur in `planets`, i.e. the options of the multi-select.
pub fn present_classes(planets: &[PlanetRecord]) -> BTreeSet<Habitability> {
    planets.iter().map(|p| p.habitability).collect()
}

/// Indices of planets passing `selection`, in dataset order.
pub fn filtered_indices(planets: &[PlanetRecord], selection: &FilterSelection) -> Vec<usize> {
    planets
        .iter()
        .enumerate()
        .filter(|(_, p)| selection.accepts(p))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Random sample
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Index into the full planet list.
    Picked(usize),
    /// The filtered subset was empty.
    NoMatch,
}

/// Draw one index uniformly from `visible`.
pub fn sample_one<R: Rng + ?Sized>(visible: &[usize], rng: &mut R) -> SampleOutcome {
    match visible.choose(rng) {
        Some(&i) => SampleOutcome::Picked(i),
        None => SampleOutcome::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn planet(name: &str, radius: f64, temp: f64, distance: f64) -> PlanetRecord {
        PlanetRecord::new(name, radius, temp, 5700.0, 1.0, distance)
    }

    fn catalogue() -> Vec<PlanetRecord> {
        vec![
            planet("terra", 1.0, 300.0, 50.0),
            planet("puffy", 5.0, 300.0, 120.0),
            planet("scorch", 8.0, 900.0, 3000.0),
            planet("lo-edge", 0.5, 260.0, 0.0),
            planet("hi-edge", 2.5, 260.0, 500.0),
            planet("far", 1.2, 280.0, 500.01),
        ]
    }

    #[test]
    fn earth_like_row_passes_default_ranges() {
        let planets = vec![planet("terra", 1.0, 300.0, 50.0)];
        let selection = FilterSelection {
            habitability: [Habitability::High].into_iter().collect(),
            ..FilterSelection::default()
        };
        let visible = filtered_indices(&planets, &selection);
        assert_eq!(visible, vec![0]);
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let planets = catalogue();
        let visible = filtered_indices(&planets, &FilterSelection::default());
        let names: Vec<&str> = visible.iter().map(|&i| planets[i].name.as_str()).collect();
        assert_eq!(names, ["terra", "lo-edge", "hi-edge"]);
    }

    #[test]
    fn conditions_are_conjunctive() {
        let planets = catalogue();
        let selection = FilterSelection {
            radius: (0.1, 10.0),
            distance: (0.0, 5000.0),
            habitability: [Habitability::Medium].into_iter().collect(),
        };
        let visible = filtered_indices(&planets, &selection);
        assert_eq!(visible, vec![1]);

        let selection = FilterSelection {
            radius: (4.0, 10.0),
            distance: (0.0, 100.0),
            habitability: Habitability::ALL.into_iter().collect(),
        };
        // puffy and scorch match the radius range but lie beyond 100 ly.
        assert!(filtered_indices(&planets, &selection).is_empty());
    }

    #[test]
    fn empty_class_set_matches_nothing() {
        let planets = catalogue();
        let selection = FilterSelection {
            habitability: BTreeSet::new(),
            ..FilterSelection::default()
        };
        assert!(filtered_indices(&planets, &selection).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let planets = catalogue();
        let selection = FilterSelection::default();
        let once = filtered_indices(&planets, &selection);
        let subset: Vec<PlanetRecord> = once.iter().map(|&i| planets[i].clone()).collect();
        let twice = filtered_indices(&subset, &selection);
        assert_eq!(twice.len(), once.len());
        assert_eq!(filtered_indices(&planets, &selection), once);
    }

    #[test]
    fn dataset_selection_offers_only_present_classes() {
        let planets = vec![
            planet("terra", 1.0, 300.0, 50.0),
            planet("scorch", 8.0, 900.0, 10.0),
        ];
        let selection = FilterSelection::for_dataset(&planets);
        assert_eq!(
            selection.habitability,
            BTreeSet::from([Habitability::Low, Habitability::High])
        );
        assert_eq!(selection.radius, (0.5, 2.5));
        assert_eq!(selection.distance, (0.0, 500.0));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = FilterSelection::default();
        selection.toggle(Habitability::Low);
        assert!(!selection.habitability.contains(&Habitability::Low));
        selection.toggle(Habitability::Low);
        assert!(selection.habitability.contains(&Habitability::Low));
    }

    #[test]
    fn sampling_empty_subset_signals_no_match() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_one(&[], &mut rng), SampleOutcome::NoMatch);
    }

    #[test]
    fn sampling_picks_from_the_subset() {
        let mut rng = StdRng::seed_from_u64(7);
        let visible = [3, 5, 9];
        for _ in 0..50 {
            match sample_one(&visible, &mut rng) {
                SampleOutcome::Picked(i) => assert!(visible.contains(&i)),
                SampleOutcome::NoMatch => panic!("subset is not empty"),
            }
        }
        assert_eq!(sample_one(&[4], &mut rng), SampleOutcome::Picked(4));
    }
}

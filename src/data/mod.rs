/// Data layer: download, loading, and filtering.
///
/// Architecture:
/// ```text
///   dataset URL
///        │
///        ▼
///   ┌──────────┐
///   │  fetch    │  download once if the local copy is absent
///   └──────────┘
///        │  exoplanets.csv
///        ▼
///   ┌──────────┐
///   │  loader   │  project 6 columns, drop incomplete rows → Vec<PlanetRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  range + class predicates → filtered indices, random sample
///   └──────────┘
/// ```

pub mod fetch;
pub mod loader;
pub mod model;
pub mod filter;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::apod::{DailyImage, fetch_daily_image};
use crate::color::HabitabilityColors;
use crate::config::AppConfig;
use crate::data::fetch::{DownloadOutcome, ensure_local_copy, refresh_local_copy};
use crate::data::filter::{
    FilterSelection, SampleOutcome, filtered_indices, present_classes, sample_one,
};
use crate::data::loader;
use crate::data::model::{Habitability, PlanetRecord};
use crate::net::HttpClient;

// ---------------------------------------------------------------------------
// Notices shown above the results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Notice {
            level,
            text: text.into(),
        }
    }
}

/// Result of the last APOD request.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageState {
    NotFetched,
    Loaded(DailyImage),
    Failed(String),
}

/// What the central panel shows below the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Table,
    Scatter,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,
    client: Box<dyn HttpClient>,

    /// Processed planets (None until a load succeeds, or after a failed one).
    pub planets: Option<Vec<PlanetRecord>>,

    /// File the current planets were read from.
    pub dataset_path: Option<PathBuf>,

    /// Classes occurring in the data: the options of the class selector.
    pub classes: BTreeSet<Habitability>,

    pub selection: FilterSelection,

    /// Indices of planets passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Last "Surprise me" result; cleared whenever the selection changes.
    pub sample: Option<SampleOutcome>,

    pub image: ImageState,

    /// Messages from the last fetch → load run.
    pub notices: Vec<Notice>,

    pub view: ResultsView,
    pub colors: HabitabilityColors,
    rng: StdRng,
}

impl AppState {
    pub fn new(config: AppConfig, client: Box<dyn HttpClient>) -> Self {
        Self {
            config,
            client,
            planets: None,
            dataset_path: None,
            classes: BTreeSet::new(),
            selection: FilterSelection::default(),
            visible_indices: Vec::new(),
            sample: None,
            image: ImageState::NotFetched,
            notices: Vec::new(),
            view: ResultsView::Table,
            colors: HabitabilityColors::default(),
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Fetch → load: make sure the cached file exists, then process it.
    pub fn run_pipeline(&mut self) {
        self.notices.clear();
        let path = self.config.data_path.clone();
        let outcome = ensure_local_copy(&path, &self.config.dataset_url, self.client.as_ref());
        self.report_download(outcome);
        self.load_dataset(&path);
    }

    /// Re-download the dataset and reload it. A failed download keeps the
    /// previously loaded planets.
    pub fn refresh_dataset(&mut self) {
        self.notices.clear();
        let path = self.config.data_path.clone();
        let outcome = refresh_local_copy(&path, &self.config.dataset_url, self.client.as_ref());
        let failed = outcome.is_failed();
        self.report_download(outcome);
        if !failed {
            self.load_dataset(&path);
        }
    }

    /// Load planets from `path`. On error the table is cleared and the error
    /// becomes a notice.
    pub fn load_dataset(&mut self, path: &Path) {
        match loader::load(path) {
            Ok(planets) => {
                log::info!("Loaded {} planets from {}", planets.len(), path.display());
                self.set_planets(planets);
                self.dataset_path = Some(path.to_path_buf());
            }
            Err(e) => {
                log::error!("{e}");
                self.planets = None;
                self.dataset_path = None;
                self.classes.clear();
                self.visible_indices.clear();
                self.sample = None;
                self.notices.push(Notice::new(NoticeLevel::Error, e.to_string()));
            }
        }
    }

    /// Ingest newly processed planets and reset the selection.
    pub fn set_planets(&mut self, planets: Vec<PlanetRecord>) {
        self.classes = present_classes(&planets);
        self.selection = FilterSelection::for_dataset(&planets);
        self.visible_indices = filtered_indices(&planets, &self.selection);
        self.sample = None;
        self.planets = Some(planets);
    }

    fn report_download(&mut self, outcome: DownloadOutcome) {
        let notice = match outcome {
            DownloadOutcome::AlreadyPresent => {
                Notice::new(NoticeLevel::Info, "Data file found locally.")
            }
            DownloadOutcome::Downloaded { bytes } => Notice::new(
                NoticeLevel::Success,
                format!("Exoplanet data downloaded ({bytes} bytes)."),
            ),
            DownloadOutcome::Failed(e) => Notice::new(NoticeLevel::Warning, e.to_string()),
        };
        self.notices.push(notice);
    }

    /// One APOD request; the outcome replaces the previous one.
    pub fn fetch_image(&mut self) {
        self.image = match fetch_daily_image(
            self.client.as_ref(),
            &self.config.apod_endpoint,
            &self.config.api_key,
        ) {
            Ok(image) => ImageState::Loaded(image),
            Err(e) => {
                log::warn!("{e}");
                ImageState::Failed(e.to_string())
            }
        };
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(planets) = &self.planets {
            let visible = filtered_indices(planets, &self.selection);
            if visible != self.visible_indices {
                self.sample = None;
            }
            self.visible_indices = visible;
        }
    }

    /// Toggle one class in the selection.
    pub fn toggle_class(&mut self, class: Habitability) {
        self.selection.toggle(class);
        self.refilter();
    }

    pub fn select_all_classes(&mut self) {
        self.selection.habitability = self.classes.clone();
        self.refilter();
    }

    pub fn select_no_classes(&mut self) {
        self.selection.habitability.clear();
        self.refilter();
    }

    /// Draw one planet from the visible subset.
    pub fn surprise_me(&mut self) -> SampleOutcome {
        let outcome = sample_one(&self.visible_indices, &mut self.rng);
        self.sample = Some(outcome);
        outcome
    }

    /// The planet picked by the last sample, if any.
    pub fn sampled_planet(&self) -> Option<&PlanetRecord> {
        match (self.sample?, &self.planets) {
            (SampleOutcome::Picked(i), Some(planets)) => planets.get(i),
            _ => None,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }
}

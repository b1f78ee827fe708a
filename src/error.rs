use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors surfaced to the notice area
// ---------------------------------------------------------------------------

/// Failures of the fetch → load pipeline and of the APOD client.
///
/// An empty filter result is deliberately not represented here: sampling from
/// an empty subset yields [`crate::data::filter::SampleOutcome::NoMatch`].
#[derive(Debug, Error)]
pub enum ExoError {
    /// Non-200 status or transport error while downloading the dataset.
    #[error("failed to download exoplanet data from {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    /// Load attempted with no usable dataset file.
    #[error("exoplanet data file {} is missing or malformed: {reason}", .path.display())]
    DataFileMissingOrMalformed { path: PathBuf, reason: String },

    /// Non-200 status, transport error or bad JSON from the APOD endpoint.
    #[error("failed to fetch Astronomy Picture of the Day: {0}")]
    ImageFetchFailed(String),
}

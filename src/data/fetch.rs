use std::path::Path;

use crate::error::ExoError;
use crate::net::HttpClient;

// ---------------------------------------------------------------------------
// Download outcome
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum DownloadOutcome {
    /// The file existed; nothing was fetched.
    AlreadyPresent,
    /// The body of a 200 response was written to the path.
    Downloaded { bytes: usize },
    /// Non-200 status, transport error or write failure. Carries
    /// [`ExoError::DownloadFailed`].
    Failed(ExoError),
}

impl DownloadOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, DownloadOutcome::Failed(_))
    }
}

// ---------------------------------------------------------------------------
// Disk-backed single-entry cache
// ---------------------------------------------------------------------------

/// Make sure a local copy of the dataset exists at `path`.
///
/// If it does, no request is made. Otherwise one GET is issued and the body
/// is written verbatim on HTTP 200; any other outcome leaves `path` untouched.
pub fn ensure_local_copy(
    path: &Path,
    source_url: &str,
    client: &dyn HttpClient,
) -> DownloadOutcome {
    if path.exists() {
        log::info!("Data file found locally at {}", path.display());
        return DownloadOutcome::AlreadyPresent;
    }
    download_to(path, source_url, client)
}

/// Re-download unconditionally. The existing file is replaced only on
/// HTTP 200, so a failed refresh keeps the previous copy.
pub fn refresh_local_copy(
    path: &Path,
    source_url: &str,
    client: &dyn HttpClient,
) -> DownloadOutcome {
    download_to(path, source_url, client)
}

fn download_to(path: &Path, source_url: &str, client: &dyn HttpClient) -> DownloadOutcome {
    log::info!("Downloading exoplanet data from {source_url}...");

    let failed = |reason: String| {
        log::error!("Download of {source_url} failed: {reason}");
        DownloadOutcome::Failed(ExoError::DownloadFailed {
            url: source_url.to_string(),
            reason,
        })
    };

    let response = match client.get(source_url) {
        Ok(r) => r,
        Err(e) => return failed(e.to_string()),
    };
    if !response.is_ok() {
        return failed(format!("HTTP {}", response.status));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            return failed(format!("creating {}: {e}", parent.display()));
        }
    }
    if let Err(e) = std::fs::write(path, &response.body) {
        return failed(format!("writing {}: {e}", path.display()));
    }

    log::info!(
        "Exoplanet data downloaded ({} bytes) to {}",
        response.body.len(),
        path.display()
    );
    DownloadOutcome::Downloaded {
        bytes: response.body.len(),
    }
}

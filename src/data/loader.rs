use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{PlanetRecord, SOURCE_COLUMNS};
use crate::error::ExoError;

/// Cell texts treated as missing, matching pandas' default NA tokens.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the planet table from a CSV file.
///
/// Rows with any of the six source columns missing are dropped; the rest get
/// their habitability derived. An absent file, a CSV syntax error, a missing
/// column or a non-numeric value in a numeric column fails the whole load.
pub fn load(path: &Path) -> Result<Vec<PlanetRecord>, ExoError> {
    read_records(path).map_err(|e| ExoError::DataFileMissingOrMalformed {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: a header row with the archive's column names; any number of
/// leading `#` comment lines; extra columns are ignored.
fn read_records(path: &Path) -> Result<Vec<PlanetRecord>> {
    if !path.exists() {
        bail!("file not found");
    }
    // Flexible so short rows can be dropped as incomplete, like pandas does.
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let mut idx = [0usize; 6];
    for (slot, name) in idx.iter_mut().zip(SOURCE_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .with_context(|| format!("CSV missing '{name}' column"))?;
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        // 1-based, counting data rows only.
        let row_no = row_no + 1;
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        if row.len() > headers.len() {
            bail!(
                "CSV row {row_no}: expected {} fields, saw {}",
                headers.len(),
                row.len()
            );
        }
        let cell = |i: usize| cell_value(row.get(idx[i]).unwrap_or(""));

        let Some(name) = cell(0) else {
            dropped += 1;
            continue;
        };
        let mut numbers = [0.0f64; 5];
        let mut complete = true;
        for (n, slot) in numbers.iter_mut().enumerate() {
            let Some(text) = cell(n + 1) else {
                complete = false;
                continue;
            };
            let column = SOURCE_COLUMNS[n + 1];
            let value = text.parse::<f64>().with_context(|| {
                format!("CSV row {row_no}, {column}: '{text}' is not a number")
            })?;
            // f64 parsing accepts any casing of "nan"; those cells are missing too.
            if value.is_nan() {
                complete = false;
            }
            *slot = value;
        }
        if !complete {
            dropped += 1;
            continue;
        }

        let [radius, temp, star_temp, star_radius, distance] = numbers;
        records.push(PlanetRecord::new(
            name,
            radius,
            temp,
            star_temp,
            star_radius,
            distance,
        ));
    }

    log::debug!(
        "Read {} complete rows from {} ({dropped} incomplete rows dropped)",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Trimmed cell text, or `None` if the cell counts as missing.
fn cell_value(raw: &str) -> Option<&str> {
    let s = raw.trim();
    if NA_TOKENS.contains(&s) { None } else { Some(s) }
}

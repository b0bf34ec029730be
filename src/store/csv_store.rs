//! Flat-file persistence of the observation table.
//!
//! The whole table lives in a single CSV file. Saving always rewrites the
//! file from scratch (header + every row); there is no locking, so two
//! concurrent writers lose updates (last writer wins).

use crate::errors::AppResult;
use crate::models::observation::Observation;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Fixed column schema of the persisted table.
pub const COLUMNS: [&str; 11] = [
    "Date",
    "Moment",
    "Fatigue",
    "Douleurs",
    "Nausees",
    "Maux_de_tete",
    "RGO",
    "Sommeil",
    "Humeur",
    "Contractions",
    "Remarques",
];

/// Read every observation, in file order.
///
/// A missing file is the normal first-run state and yields an empty table.
pub fn load(path: &Path) -> AppResult<Vec<Observation>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        let obs: Observation = rec?;
        rows.push(obs);
    }

    Ok(rows)
}

/// Rewrite the whole file with `rows`. The header is always written, even
/// for an empty table.
pub fn save(path: &Path, rows: &[Observation]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(COLUMNS)?;

    for obs in rows {
        wtr.serialize(obs)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Load the table, append `obs` and rewrite the file. Returns the new table.
pub fn append(path: &Path, obs: Observation) -> AppResult<Vec<Observation>> {
    let mut rows = load(path)?;
    rows.push(obs);
    save(path, &rows)?;
    Ok(rows)
}

/// Create an empty table (header only) if the file does not exist yet.
pub fn init_file(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    save(path, &[])?;
    Ok(true)
}

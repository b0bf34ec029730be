// src/export/logic.rs

use crate::core::filter::filter_by_month;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_export_rows;
use crate::models::month::YearMonth;
use crate::models::observation::Observation;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export observations.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `month`: `None` for the whole table, otherwise a single month
    ///
    /// Returns the number of exported rows.
    pub fn export(
        rows: &[Observation],
        format: ExportFormat,
        file: &str,
        month: Option<YearMonth>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let selected = match month {
            Some(m) => filter_by_month(rows, m),
            None => rows.to_vec(),
        };

        if selected.is_empty() {
            match month {
                Some(_) => {
                    warning("No observations found for the selected month. Nothing to export.")
                }
                None => warning("No observations to export."),
            }
            return Ok(0);
        }

        let export_rows = to_export_rows(&selected);

        match format {
            ExportFormat::Csv => export_csv(&export_rows, path)?,
            ExportFormat::Json => export_json(&export_rows, path)?,
        }

        Ok(export_rows.len())
    }
}

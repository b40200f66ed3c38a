// src/export/logic.rs

use crate::db::kv::KvStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::RecordExport;
use crate::export::range::parse_range;
use crate::storage;
use crate::ui::messages::warning;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the logged nights.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        store: &dyn KvStore,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let records = load_records(store, date_bounds)?;

        if records.is_empty() {
            warning("No sleep records matched the export range.");
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path),
            ExportFormat::Json => export_json(&records, path),
            ExportFormat::Xlsx => export_xlsx(&records, path),
        }
    }
}

fn load_records(
    store: &dyn KvStore,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<RecordExport>> {
    let records = storage::get_sleep_records(store)?;

    Ok(records
        .iter()
        .filter(|r| match bounds {
            Some((start, end)) => r.date >= start && r.date <= end,
            None => true,
        })
        .map(RecordExport::from_record)
        .collect())
}

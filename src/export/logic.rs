// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::EntryExport;
use crate::models::time_entry::TimeEntry;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `entries` to `file` in the requested format and return how
    /// many rows were written.
    pub fn export(
        entries: &[TimeEntry],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        Ok(rows.len())
    }
}

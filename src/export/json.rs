use crate::errors::AppResult;
use crate::export::model::EntryExport;
use std::path::Path;

pub(crate) fn write_json(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}

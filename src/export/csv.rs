use crate::errors::AppResult;
use crate::export::model::EntryExport;
use ::csv::Writer;
use std::path::Path;

/// Header row is derived from `EntryExport` field names.
pub(crate) fn write_csv(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    if rows.is_empty() {
        wtr.write_record([
            "id",
            "employee_id",
            "date",
            "clock_in",
            "clock_out",
            "hours_worked",
        ])?;
    }

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// src/export/model.rs

use crate::models::time_entry::TimeEntry;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: i64,
    pub employee_id: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: Option<String>,
    pub hours_worked: f64,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id,
            employee_id: e.employee_id.to_string(),
            date: e.date_str(),
            clock_in: e.clock_in.to_rfc3339(),
            clock_out: e.clock_out.map(|t| t.to_rfc3339()),
            hours_worked: e.hours_worked.as_f64(),
        }
    }
}

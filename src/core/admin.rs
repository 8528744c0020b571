//! Administrative corrections of recorded entries.

use crate::core::calculator::duration::{calendar_date, hours_between, stored_precision};
use crate::core::clock::TimeClock;
use crate::errors::{AppError, AppResult};
use crate::models::hours::Hours;
use crate::models::time_entry::{TimeEntry, TimeEntryPatch};
use crate::store::TimeEntryStore;
use chrono::{DateTime, NaiveDate, Utc};

/// Requested correction. Hours are never set directly; they are recomputed
/// from the resulting clock-in and clock-out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub date: Option<NaiveDate>,
    pub clock_in: Option<DateTime<Utc>>,
    /// `Some(None)` reopens the entry.
    pub clock_out: Option<Option<DateTime<Utc>>>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.clock_in.is_none() && self.clock_out.is_none()
    }
}

impl<S: TimeEntryStore> TimeClock<S> {
    pub fn edit_entry(&self, id: i64, edit: &EntryEdit) -> AppResult<TimeEntry> {
        let employee = self
            .store()
            .get(id)?
            .ok_or(AppError::NotFound(id))?
            .employee_id;

        self.locks().with_employee(&employee, || -> AppResult<TimeEntry> {
            let current = self.store().get(id)?.ok_or(AppError::NotFound(id))?;

            let clock_in = stored_precision(edit.clock_in.unwrap_or(current.clock_in));
            let clock_out = edit
                .clock_out
                .unwrap_or(current.clock_out)
                .map(stored_precision);

            // an explicit date wins; a moved clock-in drags the date along
            let date = match (edit.date, edit.clock_in) {
                (Some(d), _) => d,
                (None, Some(ts)) => calendar_date(ts),
                (None, None) => current.date,
            };

            let hours = match clock_out {
                Some(out) => hours_between(clock_in, out)?,
                None => Hours::ZERO,
            };

            if clock_out.is_none()
                && let Some(open) = self.store().find_open(&employee)?
                && open.id != id
            {
                return Err(AppError::AlreadyClockedIn {
                    employee: employee.to_string(),
                    date: open.date,
                });
            }

            let patch = TimeEntryPatch {
                date: Some(date),
                clock_in: Some(clock_in),
                clock_out: Some(clock_out),
                hours_worked: Some(hours),
            };
            let updated = self.store().update_by_id(id, &patch)?;

            self.audit(
                "edit",
                &format!("entry #{}", id),
                &format!(
                    "{} {} → {} ({} h)",
                    updated.date_str(),
                    updated.clock_in_str(),
                    updated.clock_out_str(),
                    updated.hours_worked
                ),
            );

            Ok(updated)
        })
    }

    pub fn delete_entry(&self, id: i64) -> AppResult<TimeEntry> {
        let entry = self.store().get(id)?.ok_or(AppError::NotFound(id))?;

        self.locks().with_employee(&entry.employee_id, || -> AppResult<TimeEntry> {
            self.store().delete_by_id(id)?;

            self.audit(
                "del",
                &format!("entry #{}", id),
                &format!("Deleted entry of {} dated {}", entry.employee_id, entry.date_str()),
            );

            Ok(entry.clone())
        })
    }
}

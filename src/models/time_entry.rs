use super::{employee_id::EmployeeId, hours::Hours};
use crate::core::calculator::duration;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One work session of one employee on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,                    // ⇔ time_entries.date (TEXT "YYYY-MM-DD")
    pub clock_in: DateTime<Utc>,            // ⇔ time_entries.clock_in (TEXT RFC3339)
    pub clock_out: Option<DateTime<Utc>>,   // NULL while the session is open
    pub hours_worked: Hours,                // ⇔ time_entries.hours_hundredths
}

impl TimeEntry {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Hours recorded so far: the frozen value once closed, the running
    /// total up to `now` while open.
    pub fn elapsed_hours(&self, now: DateTime<Utc>) -> Hours {
        match self.clock_out {
            Some(_) => self.hours_worked,
            None => duration::hours_between(self.clock_in, now).unwrap_or(Hours::ZERO),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format("%H:%M").to_string()
    }

    pub fn clock_out_str(&self) -> String {
        self.clock_out
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}

/// Row to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeEntry {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub hours_worked: Hours,
}

impl NewTimeEntry {
    /// An open session starting at `now`, dated on the calendar day of `now`.
    pub fn open(employee_id: EmployeeId, now: DateTime<Utc>) -> Self {
        let now = duration::stored_precision(now);
        Self {
            employee_id,
            date: duration::calendar_date(now),
            clock_in: now,
            clock_out: None,
            hours_worked: Hours::ZERO,
        }
    }

    pub fn into_entry(self, id: i64) -> TimeEntry {
        TimeEntry {
            id,
            employee_id: self.employee_id,
            date: self.date,
            clock_in: self.clock_in,
            clock_out: self.clock_out,
            hours_worked: self.hours_worked,
        }
    }
}

/// Partial update applied by `update_by_id`. `None` leaves a field untouched;
/// `clock_out: Some(None)` reopens the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryPatch {
    pub date: Option<NaiveDate>,
    pub clock_in: Option<DateTime<Utc>>,
    pub clock_out: Option<Option<DateTime<Utc>>>,
    pub hours_worked: Option<Hours>,
}

impl TimeEntryPatch {
    pub fn close(clock_out: DateTime<Utc>, hours_worked: Hours) -> Self {
        Self {
            clock_out: Some(Some(duration::stored_precision(clock_out))),
            hours_worked: Some(hours_worked),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, entry: &mut TimeEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(clock_in) = self.clock_in {
            entry.clock_in = clock_in;
        }
        if let Some(clock_out) = self.clock_out {
            entry.clock_out = clock_out;
        }
        if let Some(hours) = self.hours_worked {
            entry.hours_worked = hours;
        }
    }
}

//! Aggregator: hour totals over week windows and date ranges.

use crate::core::calculator::week::WeekWindow;
use crate::core::clock::TimeClock;
use crate::errors::{AppError, AppResult};
use crate::models::employee_id::EmployeeId;
use crate::models::hours::Hours;
use crate::models::time_entry::TimeEntry;
use crate::models::week_summary::{DayHours, WeeklyHoursSummary};
use crate::store::TimeEntryStore;
use chrono::NaiveDate;

/// Sum of recorded hours. Open entries count as zero.
pub fn sum_hours(entries: &[TimeEntry]) -> Hours {
    entries.iter().map(|e| e.hours_worked).sum()
}

/// Build the weekly summary from entries already restricted to `window`.
pub fn summarize_week(
    employee: &EmployeeId,
    window: WeekWindow,
    entries: &[TimeEntry],
) -> WeeklyHoursSummary {
    let days = window
        .days()
        .map(|date| {
            let of_day: Vec<&TimeEntry> = entries.iter().filter(|e| e.date == date).collect();
            DayHours {
                date,
                hours: of_day.iter().map(|e| e.hours_worked).sum(),
                entries: of_day.len(),
            }
        })
        .collect();

    let in_window: Vec<&TimeEntry> = entries.iter().filter(|e| window.contains(e.date)).collect();

    WeeklyHoursSummary {
        employee_id: employee.clone(),
        window,
        total: in_window.iter().map(|e| e.hours_worked).sum(),
        entries: in_window.len(),
        days,
    }
}

impl<S: TimeEntryStore> TimeClock<S> {
    /// Hours worked in the Sunday-to-Saturday week containing `reference`.
    pub fn weekly_hours(&self, employee: &EmployeeId, reference: NaiveDate) -> AppResult<Hours> {
        let window = WeekWindow::containing(reference);
        let entries = self.store().list_in_range(employee, window.start, window.end)?;
        Ok(sum_hours(&entries))
    }

    pub fn weekly_summary(
        &self,
        employee: &EmployeeId,
        reference: NaiveDate,
    ) -> AppResult<WeeklyHoursSummary> {
        let window = WeekWindow::containing(reference);
        let entries = self.store().list_in_range(employee, window.start, window.end)?;
        Ok(summarize_week(employee, window, &entries))
    }

    pub fn entries_in_range(
        &self,
        employee: &EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimeEntry>> {
        if start > end {
            return Err(AppError::InvalidRange { start, end });
        }
        self.store().list_in_range(employee, start, end)
    }

    pub fn hours_in_range(
        &self,
        employee: &EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Hours> {
        Ok(sum_hours(&self.entries_in_range(employee, start, end)?))
    }
}

//! Persistence contract for time entries and employee profiles.
//!
//! The clock core talks to storage only through these traits. Two
//! implementations are provided and can be swapped freely: SQLite for real
//! use and an in-memory store for tests and throwaway sessions.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::employee::{Employee, EmployeePatch};
use crate::models::employee_id::EmployeeId;
use crate::models::time_entry::{NewTimeEntry, TimeEntry, TimeEntryPatch};
use chrono::NaiveDate;

pub trait TimeEntryStore {
    /// Latest entry (by clock-in) of `employee` dated `date`.
    fn find(&self, employee: &EmployeeId, date: NaiveDate) -> AppResult<Option<TimeEntry>>;

    /// The employee's open entry, whatever its date.
    fn find_open(&self, employee: &EmployeeId) -> AppResult<Option<TimeEntry>>;

    fn get(&self, id: i64) -> AppResult<Option<TimeEntry>>;

    /// Persist a new entry and return it with its assigned id. Inserting a
    /// second open entry for the same employee fails with `AlreadyClockedIn`.
    fn insert(&self, entry: NewTimeEntry) -> AppResult<TimeEntry>;

    /// Fails with `NotFound` when no entry has this id.
    fn update_by_id(&self, id: i64, patch: &TimeEntryPatch) -> AppResult<TimeEntry>;

    /// Fails with `NotFound` when no entry has this id.
    fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// All entries of `employee`, oldest first.
    fn list_by_employee(&self, employee: &EmployeeId) -> AppResult<Vec<TimeEntry>>;

    /// Entries of `employee` dated within `[start, end]`, oldest first.
    fn list_in_range(
        &self,
        employee: &EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimeEntry>> {
        Ok(self
            .list_by_employee(employee)?
            .into_iter()
            .filter(|e| start <= e.date && e.date <= end)
            .collect())
    }

    /// Append a line to the audit trail.
    fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

pub trait EmployeeStore {
    /// Fails with `EmployeeExists` on a duplicate id.
    fn add_employee(&self, employee: &Employee) -> AppResult<()>;

    fn get_employee(&self, id: &EmployeeId) -> AppResult<Option<Employee>>;

    fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Fails with `EmployeeNotFound` on an unknown id.
    fn update_employee(&self, id: &EmployeeId, patch: &EmployeePatch) -> AppResult<Employee>;
}

/// Everything the command line needs from a backend.
pub trait Store: TimeEntryStore + EmployeeStore {}

impl<T: TimeEntryStore + EmployeeStore + ?Sized> Store for T {}

impl<T: TimeEntryStore + ?Sized> TimeEntryStore for Box<T> {
    fn find(&self, employee: &EmployeeId, date: NaiveDate) -> AppResult<Option<TimeEntry>> {
        (**self).find(employee, date)
    }

    fn find_open(&self, employee: &EmployeeId) -> AppResult<Option<TimeEntry>> {
        (**self).find_open(employee)
    }

    fn get(&self, id: i64) -> AppResult<Option<TimeEntry>> {
        (**self).get(id)
    }

    fn insert(&self, entry: NewTimeEntry) -> AppResult<TimeEntry> {
        (**self).insert(entry)
    }

    fn update_by_id(&self, id: i64, patch: &TimeEntryPatch) -> AppResult<TimeEntry> {
        (**self).update_by_id(id, patch)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        (**self).delete_by_id(id)
    }

    fn list_by_employee(&self, employee: &EmployeeId) -> AppResult<Vec<TimeEntry>> {
        (**self).list_by_employee(employee)
    }

    fn list_in_range(
        &self,
        employee: &EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimeEntry>> {
        (**self).list_in_range(employee, start, end)
    }

    fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        (**self).record(operation, target, message)
    }
}

impl<T: EmployeeStore + ?Sized> EmployeeStore for Box<T> {
    fn add_employee(&self, employee: &Employee) -> AppResult<()> {
        (**self).add_employee(employee)
    }

    fn get_employee(&self, id: &EmployeeId) -> AppResult<Option<Employee>> {
        (**self).get_employee(id)
    }

    fn list_employees(&self) -> AppResult<Vec<Employee>> {
        (**self).list_employees()
    }

    fn update_employee(&self, id: &EmployeeId, patch: &EmployeePatch) -> AppResult<Employee> {
        (**self).update_employee(id, patch)
    }
}

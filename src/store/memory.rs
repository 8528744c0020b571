//! In-memory store. Same contract as the SQLite store, nothing persisted.

use super::{EmployeeStore, TimeEntryStore};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeePatch};
use crate::models::employee_id::EmployeeId;
use crate::models::time_entry::{NewTimeEntry, TimeEntry, TimeEntryPatch};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Default)]
struct State {
    next_id: i64,
    entries: BTreeMap<i64, TimeEntry>,
    employees: BTreeMap<EmployeeId, Employee>,
    audit: Vec<AuditRecord>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the audit trail, oldest first.
    pub fn audit_trail(&self) -> Vec<AuditRecord> {
        self.state().audit.clone()
    }

    /// Every stored entry, whatever the employee.
    pub fn all_entries(&self) -> Vec<TimeEntry> {
        self.state().entries.values().cloned().collect()
    }
}

fn sorted(mut entries: Vec<TimeEntry>) -> Vec<TimeEntry> {
    entries.sort_by_key(|e| (e.date, e.clock_in, e.id));
    entries
}

impl TimeEntryStore for MemoryStore {
    fn find(&self, employee: &EmployeeId, date: NaiveDate) -> AppResult<Option<TimeEntry>> {
        Ok(self
            .state()
            .entries
            .values()
            .filter(|e| &e.employee_id == employee && e.date == date)
            .max_by_key(|e| (e.clock_in, e.id))
            .cloned())
    }

    fn find_open(&self, employee: &EmployeeId) -> AppResult<Option<TimeEntry>> {
        Ok(self
            .state()
            .entries
            .values()
            .find(|e| &e.employee_id == employee && e.is_open())
            .cloned())
    }

    fn get(&self, id: i64) -> AppResult<Option<TimeEntry>> {
        Ok(self.state().entries.get(&id).cloned())
    }

    fn insert(&self, entry: NewTimeEntry) -> AppResult<TimeEntry> {
        let mut state = self.state();

        // mirrors the partial unique index of the SQLite schema
        if entry.clock_out.is_none()
            && state
                .entries
                .values()
                .any(|e| e.employee_id == entry.employee_id && e.is_open())
        {
            return Err(AppError::AlreadyClockedIn {
                employee: entry.employee_id.to_string(),
                date: entry.date,
            });
        }

        state.next_id += 1;
        let stored = entry.into_entry(state.next_id);
        state.entries.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn update_by_id(&self, id: i64, patch: &TimeEntryPatch) -> AppResult<TimeEntry> {
        let mut state = self.state();

        let mut updated = state.entries.get(&id).cloned().ok_or(AppError::NotFound(id))?;
        patch.apply_to(&mut updated);

        if updated.is_open()
            && state
                .entries
                .values()
                .any(|e| e.id != id && e.employee_id == updated.employee_id && e.is_open())
        {
            return Err(AppError::AlreadyClockedIn {
                employee: updated.employee_id.to_string(),
                date: updated.date,
            });
        }

        state.entries.insert(id, updated.clone());
        Ok(updated)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.state()
            .entries
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound(id))
    }

    fn list_by_employee(&self, employee: &EmployeeId) -> AppResult<Vec<TimeEntry>> {
        let entries = self
            .state()
            .entries
            .values()
            .filter(|e| &e.employee_id == employee)
            .cloned()
            .collect();
        Ok(sorted(entries))
    }

    fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.state().audit.push(AuditRecord {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

impl EmployeeStore for MemoryStore {
    fn add_employee(&self, employee: &Employee) -> AppResult<()> {
        let mut state = self.state();
        if state.employees.contains_key(&employee.id) {
            return Err(AppError::EmployeeExists(employee.id.to_string()));
        }
        state.employees.insert(employee.id.clone(), employee.clone());
        Ok(())
    }

    fn get_employee(&self, id: &EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.state().employees.get(id).cloned())
    }

    fn list_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.state().employees.values().cloned().collect())
    }

    fn update_employee(&self, id: &EmployeeId, patch: &EmployeePatch) -> AppResult<Employee> {
        let mut state = self.state();
        let employee = state
            .employees
            .get_mut(id)
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))?;
        patch.apply_to(employee);
        Ok(employee.clone())
    }
}

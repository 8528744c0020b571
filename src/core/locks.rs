use crate::models::employee_id::EmployeeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

type Slot = Arc<Mutex<()>>;

/// Per-employee mutual exclusion for read-check-write sequences.
/// Operations on different employees never wait on each other.
///
/// A slot lives in the table only while someone holds or waits on it, so
/// the table stays bounded by the number of in-flight operations.
#[derive(Default)]
pub struct EmployeeLocks {
    table: Mutex<HashMap<EmployeeId, Slot>>,
}

/// Drops the table entry once its last user is gone, also on unwind.
struct Release<'a> {
    locks: &'a EmployeeLocks,
    employee: &'a EmployeeId,
    slot: Slot,
}

impl Drop for Release<'_> {
    fn drop(&mut self) {
        let mut table = self.locks.table();
        // table + this handle: nobody else holds or waits on it
        if Arc::strong_count(&self.slot) == 2 {
            table.remove(self.employee);
        }
    }
}

impl EmployeeLocks {
    fn table(&self) -> std::sync::MutexGuard<'_, HashMap<EmployeeId, Slot>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, employee: &EmployeeId) -> Slot {
        self.table().entry(employee.clone()).or_default().clone()
    }

    /// Run `f` while holding the lock of `employee`.
    pub fn with_employee<T>(&self, employee: &EmployeeId, f: impl FnOnce() -> T) -> T {
        let release = Release {
            locks: self,
            employee,
            slot: self.slot(employee),
        };
        let _guard = release.slot.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }

    /// Number of employees with a lock currently held or awaited.
    pub fn tracked(&self) -> usize {
        self.table().len()
    }
}

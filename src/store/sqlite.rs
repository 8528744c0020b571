//! SQLite-backed store.

use super::{EmployeeStore, TimeEntryStore};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::{employees, log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeePatch};
use crate::models::employee_id::EmployeeId;
use crate::models::time_entry::{NewTimeEntry, TimeEntry, TimeEntryPatch};
use chrono::NaiveDate;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl TimeEntryStore for SqliteStore {
    fn find(&self, employee: &EmployeeId, date: NaiveDate) -> AppResult<Option<TimeEntry>> {
        queries::load_latest_for_date(&self.pool.conn, employee, &date)
    }

    fn find_open(&self, employee: &EmployeeId) -> AppResult<Option<TimeEntry>> {
        queries::load_open_entry(&self.pool.conn, employee)
    }

    fn get(&self, id: i64) -> AppResult<Option<TimeEntry>> {
        queries::load_entry(&self.pool.conn, id)
    }

    fn insert(&self, entry: NewTimeEntry) -> AppResult<TimeEntry> {
        let id = queries::insert_entry(&self.pool.conn, &entry)?;
        Ok(entry.into_entry(id))
    }

    fn update_by_id(&self, id: i64, patch: &TimeEntryPatch) -> AppResult<TimeEntry> {
        let tx = self.pool.conn.unchecked_transaction()?;

        let mut entry = queries::load_entry(&tx, id)?.ok_or(AppError::NotFound(id))?;
        patch.apply_to(&mut entry);
        queries::update_entry(&tx, &entry)?;

        tx.commit()?;
        Ok(entry)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        match queries::delete_entry(&self.pool.conn, id)? {
            0 => Err(AppError::NotFound(id)),
            _ => Ok(()),
        }
    }

    fn list_by_employee(&self, employee: &EmployeeId) -> AppResult<Vec<TimeEntry>> {
        queries::load_entries_for_employee(&self.pool.conn, employee)
    }

    fn list_in_range(
        &self,
        employee: &EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimeEntry>> {
        queries::load_entries_in_range(&self.pool.conn, employee, &start, &end)
    }

    fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::ttlog(&self.pool.conn, operation, target, message)
    }
}

impl EmployeeStore for SqliteStore {
    fn add_employee(&self, employee: &Employee) -> AppResult<()> {
        employees::insert_employee(&self.pool.conn, employee)
    }

    fn get_employee(&self, id: &EmployeeId) -> AppResult<Option<Employee>> {
        employees::load_employee(&self.pool.conn, id)
    }

    fn list_employees(&self) -> AppResult<Vec<Employee>> {
        employees::load_employees(&self.pool.conn)
    }

    fn update_employee(&self, id: &EmployeeId, patch: &EmployeePatch) -> AppResult<Employee> {
        let mut employee = employees::load_employee(&self.pool.conn, id)?
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))?;
        patch.apply_to(&mut employee);
        employees::update_employee(&self.pool.conn, &employee)?;
        Ok(employee)
    }
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, Utc};
use rtimeclock::core::TimeClock;
use rtimeclock::core::policy::ClockPolicy;
use rtimeclock::errors::{AppError, AppResult};
use rtimeclock::models::employee_id::EmployeeId;
use rtimeclock::models::time_entry::{NewTimeEntry, TimeEntry, TimeEntryPatch};
use rtimeclock::store::{MemoryStore, SqliteStore, Store, TimeEntryStore};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::Duration as StdDuration;

/// Binary under test, with its configuration directory pointed at a
/// scratch location so the user's real configuration is never read.
pub fn rtc() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimeclock");
    cmd.env("RTIMECLOCK_HOME", test_home());
    cmd
}

pub fn test_home() -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push("rtimeclock_test_home");
    path.to_string_lossy().to_string()
}

/// Fresh, empty configuration directory named after the test
pub fn fresh_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock_home", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh database without touching the configuration file
pub fn init_db(db_path: &str) {
    rtc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Clock employee `emp` in at `at_in` and out at `at_out`
pub fn work(db_path: &str, emp: &str, at_in: &str, at_out: &str) {
    rtc()
        .args(["--db", db_path, "-e", emp, "--at", at_in, "in"])
        .assert()
        .success();
    rtc()
        .args(["--db", db_path, "-e", emp, "--at", at_out, "out"])
        .assert()
        .success();
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

pub fn emp(id: &str) -> EmployeeId {
    EmployeeId::parse(id).expect("valid employee id")
}

/// One clock per store implementation, so every behavior is checked
/// against both.
pub fn clocks(policy: ClockPolicy) -> Vec<(&'static str, TimeClock<Box<dyn Store>>)> {
    vec![
        (
            "memory",
            TimeClock::with_policy(Box::new(MemoryStore::new()) as Box<dyn Store>, policy),
        ),
        (
            "sqlite",
            TimeClock::with_policy(
                Box::new(SqliteStore::in_memory().expect("in-memory sqlite")) as Box<dyn Store>,
                policy,
            ),
        ),
    ]
}

/// Entry store with no uniqueness check of its own and a slow `find_open`,
/// so any read-check-write race in the clock shows up as a duplicate.
#[derive(Default)]
pub struct SlowLookupStore {
    entries: Mutex<BTreeMap<i64, TimeEntry>>,
}

impl SlowLookupStore {
    pub fn entries(&self) -> Vec<TimeEntry> {
        self.entries.lock().unwrap().values().cloned().collect()
    }
}

impl TimeEntryStore for SlowLookupStore {
    fn find(&self, employee: &EmployeeId, date: NaiveDate) -> AppResult<Option<TimeEntry>> {
        Ok(self
            .entries()
            .into_iter()
            .filter(|e| &e.employee_id == employee && e.date == date)
            .max_by_key(|e| e.clock_in))
    }

    fn find_open(&self, employee: &EmployeeId) -> AppResult<Option<TimeEntry>> {
        let found = self
            .entries()
            .into_iter()
            .find(|e| &e.employee_id == employee && e.is_open());
        thread::sleep(StdDuration::from_millis(20));
        Ok(found)
    }

    fn get(&self, id: i64) -> AppResult<Option<TimeEntry>> {
        Ok(self.entries.lock().unwrap().get(&id).cloned())
    }

    fn insert(&self, entry: NewTimeEntry) -> AppResult<TimeEntry> {
        let mut entries = self.entries.lock().unwrap();
        let id = entries.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = entry.into_entry(id);
        entries.insert(id, stored.clone());
        Ok(stored)
    }

    fn update_by_id(&self, id: i64, patch: &TimeEntryPatch) -> AppResult<TimeEntry> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get_mut(&id).ok_or(AppError::NotFound(id))?;
        patch.apply_to(entry);
        Ok(entry.clone())
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.entries
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound(id))
    }

    fn list_by_employee(&self, employee: &EmployeeId) -> AppResult<Vec<TimeEntry>> {
        Ok(self
            .entries()
            .into_iter()
            .filter(|e| &e.employee_id == employee)
            .collect())
    }

    fn record(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

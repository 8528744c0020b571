//! Session manager: clock-in / clock-out transitions per employee.
//!
//! State machine per (employee, date): no session → open → closed.
//! At most one open session exists per employee at any time.

use crate::core::calculator::duration::{calendar_date, hours_between, stored_precision};
use crate::core::locks::EmployeeLocks;
use crate::core::policy::{ClockPolicy, SessionPolicy, SkewPolicy};
use crate::errors::{AppError, AppResult};
use crate::models::employee_id::EmployeeId;
use crate::models::hours::Hours;
use crate::models::time_entry::{NewTimeEntry, TimeEntry, TimeEntryPatch};
use crate::store::TimeEntryStore;
use crate::ui::messages::warning;
use chrono::{DateTime, Utc};

pub struct TimeClock<S> {
    store: S,
    policy: ClockPolicy,
    locks: EmployeeLocks,
}

impl<S: TimeEntryStore> TimeClock<S> {
    pub fn new(store: S) -> Self {
        Self::with_policy(store, ClockPolicy::default())
    }

    pub fn with_policy(store: S, policy: ClockPolicy) -> Self {
        Self {
            store,
            policy,
            locks: EmployeeLocks::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> ClockPolicy {
        self.policy
    }

    pub(crate) fn locks(&self) -> &EmployeeLocks {
        &self.locks
    }

    /// Audit failures never fail the operation that triggered them.
    pub(crate) fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.record(operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    /// Open a session for `employee` starting at `now`.
    pub fn clock_in(&self, employee: &EmployeeId, now: DateTime<Utc>) -> AppResult<TimeEntry> {
        self.locks.with_employee(employee, || -> AppResult<TimeEntry> {
            let today = calendar_date(now);

            if let Some(open) = self.store.find_open(employee)? {
                return Err(if open.date == today {
                    AppError::AlreadyClockedIn {
                        employee: employee.to_string(),
                        date: today,
                    }
                } else {
                    AppError::StaleOpenSession {
                        employee: employee.to_string(),
                        id: open.id,
                        date: open.date,
                    }
                });
            }

            if self.policy.session == SessionPolicy::OnePerDay
                && self.store.find(employee, today)?.is_some()
            {
                return Err(AppError::DayAlreadyRecorded {
                    employee: employee.to_string(),
                    date: today,
                });
            }

            let entry = self.store.insert(NewTimeEntry::open(employee.clone(), now))?;

            self.audit(
                "clock_in",
                employee.as_str(),
                &format!("Entry #{} opened at {}", entry.id, entry.clock_in.to_rfc3339()),
            );

            Ok(entry)
        })
    }

    /// Close today's open session of `employee` at `now`.
    pub fn clock_out(&self, employee: &EmployeeId, now: DateTime<Utc>) -> AppResult<TimeEntry> {
        self.locks.with_employee(employee, || -> AppResult<TimeEntry> {
            let now = stored_precision(now);
            let today = calendar_date(now);

            let open = self
                .store
                .find_open(employee)?
                .filter(|e| e.date == today)
                .ok_or_else(|| AppError::NoOpenSession {
                    employee: employee.to_string(),
                    date: today,
                })?;

            let (clock_out, hours) = match hours_between(open.clock_in, now) {
                Ok(hours) => (now, hours),
                Err(AppError::ClockSkew { .. }) if self.policy.skew == SkewPolicy::Clamp => {
                    (open.clock_in, Hours::ZERO)
                }
                Err(e) => return Err(e),
            };

            let closed = self
                .store
                .update_by_id(open.id, &TimeEntryPatch::close(clock_out, hours))?;

            self.audit(
                "clock_out",
                employee.as_str(),
                &format!("Entry #{} closed with {} h", closed.id, closed.hours_worked),
            );

            Ok(closed)
        })
    }

    /// Today's entry: the open one if any, otherwise the latest closed one.
    pub fn current_entry(
        &self,
        employee: &EmployeeId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<TimeEntry>> {
        let today = calendar_date(now);

        if let Some(open) = self.store.find_open(employee)?
            && open.date == today
        {
            return Ok(Some(open));
        }

        self.store.find(employee, today)
    }

    /// Latest `limit` entries, newest first.
    pub fn recent_entries(&self, employee: &EmployeeId, limit: usize) -> AppResult<Vec<TimeEntry>> {
        let mut entries = self.store.list_by_employee(employee)?;
        entries.sort_by_key(|e| std::cmp::Reverse((e.date, e.clock_in, e.id)));
        entries.truncate(limit);
        Ok(entries)
    }
}

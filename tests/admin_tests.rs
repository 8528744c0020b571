use chrono::NaiveDate;
use rtimeclock::core::admin::EntryEdit;
use rtimeclock::core::employees::EmployeeLogic;
use rtimeclock::core::{ClockPolicy, TimeClock};
use rtimeclock::errors::AppError;
use rtimeclock::models::employee::{Employee, EmployeePatch};
use rtimeclock::models::hours::Hours;
use rtimeclock::store::{MemoryStore, TimeEntryStore};

mod common;
use common::{clocks, emp, ts};

fn profile(id: &str, name: &str) -> Employee {
    Employee {
        id: emp(id),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        department: "Support".to_string(),
        position: "Agent".to_string(),
        start_date: NaiveDate::from_ymd_opt(2023, 1, 9),
    }
}

#[test]
fn test_edit_clock_out_recomputes_hours() {
    for (name, clock) in clocks(ClockPolicy::default()) {
        let e = emp("1");
        clock.clock_in(&e, ts("2024-03-04T09:00:00Z")).unwrap();
        let closed = clock.clock_out(&e, ts("2024-03-04T17:00:00Z")).unwrap();

        let edit = EntryEdit {
            clock_out: Some(Some(ts("2024-03-04T18:15:00Z"))),
            ..EntryEdit::default()
        };
        let updated = clock.edit_entry(closed.id, &edit).unwrap();
        assert_eq!(updated.hours_worked.to_string(), "9.25", "{name}");

        let stored = clock.store().get(closed.id).unwrap().unwrap();
        assert_eq!(stored.hours_worked.to_string(), "9.25", "{name}");
    }
}

#[test]
fn test_edit_clock_in_moves_the_date() {
    for (name, clock) in clocks(ClockPolicy::default()) {
        let e = emp("1");
        let opened = clock.clock_in(&e, ts("2024-03-04T09:00:00Z")).unwrap();

        // close the forgotten session from the previous evening
        let edit = EntryEdit {
            clock_in: Some(ts("2024-03-03T22:00:00Z")),
            clock_out: Some(Some(ts("2024-03-04T02:00:00Z"))),
            ..EntryEdit::default()
        };
        let updated = clock.edit_entry(opened.id, &edit).unwrap();
        assert_eq!(updated.date, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(), "{name}");
        assert_eq!(updated.hours_worked.to_string(), "4.00", "{name}");
        assert!(!updated.is_open(), "{name}");
    }
}

#[test]
fn test_explicit_date_wins_over_clock_in() {
    for (name, clock) in clocks(ClockPolicy::default()) {
        let e = emp("1");
        let opened = clock.clock_in(&e, ts("2024-03-04T09:00:00Z")).unwrap();

        let edit = EntryEdit {
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
            clock_in: Some(ts("2024-03-04T08:00:00Z")),
            ..EntryEdit::default()
        };
        let updated = clock.edit_entry(opened.id, &edit).unwrap();
        assert_eq!(updated.date_str(), "2024-03-05", "{name}");
        assert!(updated.is_open(), "{name}");
        assert_eq!(updated.hours_worked, Hours::ZERO, "{name}");
    }
}

#[test]
fn test_edit_rejects_clock_out_before_clock_in() {
    for (name, clock) in clocks(ClockPolicy::default()) {
        let e = emp("1");
        let opened = clock.clock_in(&e, ts("2024-03-04T09:00:00Z")).unwrap();

        let edit = EntryEdit {
            clock_out: Some(Some(ts("2024-03-04T08:00:00Z"))),
            ..EntryEdit::default()
        };
        let err = clock.edit_entry(opened.id, &edit).unwrap_err();
        assert!(matches!(err, AppError::ClockSkew { .. }), "{name}: {err}");

        let stored = clock.store().get(opened.id).unwrap().unwrap();
        assert!(stored.is_open(), "{name}");
    }
}

#[test]
fn test_reopen_respects_single_open_session() {
    for (name, clock) in clocks(ClockPolicy::default()) {
        let e = emp("1");
        clock.clock_in(&e, ts("2024-03-04T09:00:00Z")).unwrap();
        let monday = clock.clock_out(&e, ts("2024-03-04T17:00:00Z")).unwrap();
        clock.clock_in(&e, ts("2024-03-05T09:00:00Z")).unwrap();

        let reopen = EntryEdit {
            clock_out: Some(None),
            ..EntryEdit::default()
        };
        let err = clock.edit_entry(monday.id, &reopen).unwrap_err();
        assert!(matches!(err, AppError::AlreadyClockedIn { .. }), "{name}: {err}");

        clock.clock_out(&e, ts("2024-03-05T17:00:00Z")).unwrap();
        let reopened = clock.edit_entry(monday.id, &reopen).unwrap();
        assert!(reopened.is_open(), "{name}");
        assert_eq!(reopened.hours_worked, Hours::ZERO, "{name}");
    }
}

#[test]
fn test_edit_and_delete_unknown_entry() {
    for (name, clock) in clocks(ClockPolicy::default()) {
        let edit = EntryEdit {
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
            ..EntryEdit::default()
        };
        assert!(
            matches!(clock.edit_entry(42, &edit), Err(AppError::NotFound(42))),
            "{name}"
        );
        assert!(
            matches!(clock.delete_entry(42), Err(AppError::NotFound(42))),
            "{name}"
        );
    }
}

#[test]
fn test_delete_entry_frees_the_day() {
    for (name, clock) in clocks(ClockPolicy::default()) {
        let e = emp("1");
        clock.clock_in(&e, ts("2024-03-04T09:00:00Z")).unwrap();
        let closed = clock.clock_out(&e, ts("2024-03-04T10:00:00Z")).unwrap();

        let removed = clock.delete_entry(closed.id).unwrap();
        assert_eq!(removed.id, closed.id, "{name}");
        assert!(clock.store().get(closed.id).unwrap().is_none(), "{name}");

        // the day may be recorded again
        clock.clock_in(&e, ts("2024-03-04T11:00:00Z")).unwrap();
    }
}

#[test]
fn test_admin_operations_are_audited() {
    let clock = TimeClock::new(MemoryStore::new());
    let e = emp("1");
    let opened = clock.clock_in(&e, ts("2024-03-04T09:00:00Z")).unwrap();

    let edit = EntryEdit {
        clock_out: Some(Some(ts("2024-03-04T12:00:00Z"))),
        ..EntryEdit::default()
    };
    clock.edit_entry(opened.id, &edit).unwrap();
    clock.delete_entry(opened.id).unwrap();

    let trail = clock.store().audit_trail();
    let ops: Vec<&str> = trail.iter().map(|r| r.operation.as_str()).collect();
    assert_eq!(ops, vec!["clock_in", "edit", "del"]);
    assert!(trail[1].message.contains("3.00 h"));
}

#[test]
fn test_employee_profiles_lifecycle() {
    for (name, clock) in clocks(ClockPolicy::default()) {
        let store = clock.store().as_ref();

        EmployeeLogic::add(store, &profile("e2", "Bea")).unwrap();
        EmployeeLogic::add(store, &profile("e1", "Ann")).unwrap();

        let err = EmployeeLogic::add(store, &profile("e1", "Ann again")).unwrap_err();
        assert!(matches!(err, AppError::EmployeeExists(_)), "{name}: {err}");

        let ann = EmployeeLogic::show(store, &emp("e1")).unwrap();
        assert_eq!(ann.name, "Ann", "{name}");
        assert_eq!(ann.start_date, NaiveDate::from_ymd_opt(2023, 1, 9), "{name}");

        let ids: Vec<String> = EmployeeLogic::list(store)
            .unwrap()
            .iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["e1", "e2"], "{name}");

        let patch = EmployeePatch {
            position: Some("Team lead".to_string()),
            ..EmployeePatch::default()
        };
        let updated = EmployeeLogic::update(store, &emp("e1"), &patch).unwrap();
        assert_eq!(updated.position, "Team lead", "{name}");
        assert_eq!(updated.department, "Support", "{name}");
        assert_eq!(
            EmployeeLogic::show(store, &emp("e1")).unwrap().position,
            "Team lead",
            "{name}"
        );
    }
}

#[test]
fn test_employee_validation() {
    for (name, clock) in clocks(ClockPolicy::default()) {
        let store = clock.store().as_ref();

        let mut bad = profile("e1", "Ann");
        bad.email = "not-an-email".to_string();
        let err = EmployeeLogic::add(store, &bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidEmail(_)), "{name}: {err}");

        let err = EmployeeLogic::show(store, &emp("ghost")).unwrap_err();
        assert!(matches!(err, AppError::EmployeeNotFound(_)), "{name}: {err}");

        let patch = EmployeePatch {
            name: Some("Ghost".to_string()),
            ..EmployeePatch::default()
        };
        let err = EmployeeLogic::update(store, &emp("ghost"), &patch).unwrap_err();
        assert!(matches!(err, AppError::EmployeeNotFound(_)), "{name}: {err}");

        EmployeeLogic::add(store, &profile("e1", "Ann")).unwrap();
        let err = EmployeeLogic::update(store, &emp("e1"), &EmployeePatch::default()).unwrap_err();
        assert!(matches!(err, AppError::Other(_)), "{name}: {err}");
    }
}

use chrono::NaiveDate;
use rtimeclock::config::Config;
use rtimeclock::config::migrate::{migrate_config, missing_keys};
use rtimeclock::core::calculator::duration::hours_between;
use rtimeclock::core::calculator::week::{WeekWindow, start_of_week};
use rtimeclock::core::{SessionPolicy, SkewPolicy};
use rtimeclock::errors::AppError;
use rtimeclock::models::employee_id::EmployeeId;
use rtimeclock::models::hours::Hours;
use rtimeclock::utils::date::{month_bounds, parse_period};
use rtimeclock::utils::formatting::hours2readable;
use rtimeclock::utils::time::parse_timestamp;
use std::fs;

mod common;
use common::{temp_out, ts};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_hours_display_and_serde() {
    assert_eq!(Hours::from_hundredths(850).to_string(), "8.50");
    assert_eq!(Hours::from_hundredths(5).to_string(), "0.05");
    assert_eq!(hours2readable(Hours::from_hundredths(850)), "8h 30m");

    let json = serde_json::to_string(&Hours::from_hundredths(1550)).unwrap();
    assert_eq!(json, "15.5");
    let back: Hours = serde_json::from_str("7.25").unwrap();
    assert_eq!(back, Hours::from_hundredths(725));
}

#[test]
fn test_hours_between_never_negative() {
    let h = hours_between(ts("2024-03-04T09:00:00Z"), ts("2024-03-04T09:00:00Z")).unwrap();
    assert!(h.is_zero());

    let err = hours_between(ts("2024-03-04T09:00:00Z"), ts("2024-03-04T08:00:00Z")).unwrap_err();
    assert!(matches!(err, AppError::ClockSkew { .. }));
}

#[test]
fn test_employee_id_parsing() {
    assert_eq!(EmployeeId::parse(" 42 ").unwrap().as_str(), "42");
    assert!(EmployeeId::parse("").is_err());
    assert!(EmployeeId::parse("two words").is_err());
    assert!(EmployeeId::parse(&"x".repeat(65)).is_err());
    assert!("emp-7".parse::<EmployeeId>().is_ok());
}

#[test]
fn test_start_of_week_is_sunday() {
    assert_eq!(start_of_week(d(2024, 3, 3)), d(2024, 3, 3));
    assert_eq!(start_of_week(d(2024, 3, 4)), d(2024, 3, 3));
    assert_eq!(start_of_week(d(2024, 3, 9)), d(2024, 3, 3));
    assert_eq!(start_of_week(d(2024, 3, 10)), d(2024, 3, 10));
    // across a year boundary
    assert_eq!(start_of_week(d(2025, 1, 1)), d(2024, 12, 29));

    let w = WeekWindow::containing(d(2024, 2, 29));
    assert_eq!((w.start, w.end), (d(2024, 2, 25), d(2024, 3, 2)));
    assert_eq!(w.days().count(), 7);
}

#[test]
fn test_parse_period_forms() {
    assert_eq!(parse_period("2024").unwrap(), (d(2024, 1, 1), d(2024, 12, 31)));
    assert_eq!(parse_period("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_period("2024-03-04").unwrap(), (d(2024, 3, 4), d(2024, 3, 4)));
    assert_eq!(
        parse_period("2024-09:2025-01").unwrap(),
        (d(2024, 9, 1), d(2025, 1, 31))
    );
    assert!(matches!(parse_period("2024-13"), Err(AppError::InvalidDate(_))));
    assert!(matches!(
        parse_period("2025:2024"),
        Err(AppError::InvalidRange { .. })
    ));
    assert_eq!(month_bounds(d(2023, 12, 15)).unwrap(), (d(2023, 12, 1), d(2023, 12, 31)));
}

#[test]
fn test_parse_timestamp_forms() {
    let expected = ts("2024-03-04T09:00:00Z");
    assert_eq!(parse_timestamp("2024-03-04T09:00:00Z").unwrap(), expected);
    assert_eq!(parse_timestamp("2024-03-04T10:00:00+01:00").unwrap(), expected);
    assert_eq!(parse_timestamp("2024-03-04 09:00").unwrap(), expected);
    assert!(matches!(
        parse_timestamp("yesterday"),
        Err(AppError::InvalidTimestamp(_))
    ));
}

#[test]
fn test_config_defaults_and_migration() {
    let path = temp_out("config_migration", "conf");
    fs::write(&path, "database: /tmp/old.sqlite\n").unwrap();

    let cfg = Config::load_from(path.as_ref()).unwrap();
    assert_eq!(cfg.database, "/tmp/old.sqlite");
    assert_eq!(cfg.session_policy, SessionPolicy::OnePerDay);
    assert_eq!(cfg.clock_skew, SkewPolicy::Reject);
    assert_eq!(cfg.recent_limit, 5);

    let mut missing = missing_keys(path.as_ref()).unwrap();
    missing.sort();
    assert_eq!(
        missing,
        vec!["clock_skew", "employee", "recent_limit", "session_policy"]
    );

    let added = migrate_config(path.as_ref()).unwrap();
    assert_eq!(added.len(), 4);
    assert!(missing_keys(path.as_ref()).unwrap().is_empty());

    // existing values survive
    let cfg = Config::load_from(path.as_ref()).unwrap();
    assert_eq!(cfg.database, "/tmp/old.sqlite");
}

#[test]
fn test_config_policies_parse() {
    let path = temp_out("config_policies", "conf");
    fs::write(
        &path,
        "database: db.sqlite\nsession_policy: multiple\nclock_skew: clamp\nemployee: '7'\n",
    )
    .unwrap();

    let cfg = Config::load_from(path.as_ref()).unwrap();
    let policy = cfg.policy();
    assert_eq!(policy.session, SessionPolicy::Multiple);
    assert_eq!(policy.skew, SkewPolicy::Clamp);
    assert_eq!(cfg.employee.as_deref(), Some("7"));
}

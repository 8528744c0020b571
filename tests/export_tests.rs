use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, rtc, setup_test_db, temp_out, work};

fn seeded_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);
    work(&db_path, "1", "2024-03-04T09:00:00Z", "2024-03-04T17:00:00Z");
    work(&db_path, "1", "2024-04-02T09:00:00Z", "2024-04-02T13:30:00Z");
    work(&db_path, "2", "2024-03-04T09:00:00Z", "2024-03-04T10:00:00Z");
    db_path
}

#[test]
fn test_export_csv_all_entries_of_employee() {
    let db_path = seeded_db("export_csv_all");
    let out = temp_out("export_csv_all", "csv");

    rtc()
        .args(["--db", &db_path, "-e", "1", "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Exported 2 entries"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,employee_id,date,clock_in,clock_out,hours_worked"
    );
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("2024-03-04") && rows[0].ends_with(",8.0"));
    assert!(rows[1].contains("2024-04-02") && rows[1].ends_with(",4.5"));
}

#[test]
fn test_export_json_with_range() {
    let db_path = seeded_db("export_json_range");
    let out = temp_out("export_json_range", "json");

    rtc()
        .args([
            "--db", &db_path, "-e", "1", "export", "--format", "json", "--file", &out, "--range",
            "2024-03",
        ])
        .assert()
        .success()
        .stdout(contains("Exported 1 entry"));

    let content = fs::read_to_string(&out).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee_id"], "1");
    assert_eq!(rows[0]["date"], "2024-03-04");
    assert_eq!(rows[0]["hours_worked"], 8.0);
}

#[test]
fn test_export_empty_csv_still_has_header() {
    let db_path = seeded_db("export_csv_empty");
    let out = temp_out("export_csv_empty", "csv");

    rtc()
        .args([
            "--db", &db_path, "-e", "1", "export", "--file", &out, "--range", "2023",
        ])
        .assert()
        .success()
        .stdout(contains("Exported 0 entries"));

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(
        content.trim_end(),
        "id,employee_id,date,clock_in,clock_out,hours_worked"
    );
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let db_path = seeded_db("export_force");
    let out = temp_out("export_force", "csv");

    rtc()
        .args(["--db", &db_path, "-e", "2", "export", "--file", &out])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "-e", "2", "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rtc()
        .args(["--db", &db_path, "-e", "2", "export", "--file", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_export_open_entry_has_empty_clock_out() {
    let db_path = setup_test_db("export_open");
    init_db(&db_path);
    rtc()
        .args(["--db", &db_path, "-e", "1", "--at", "2024-03-04T09:00:00Z", "in"])
        .assert()
        .success();

    let out = temp_out("export_open", "json");
    rtc()
        .args(["--db", &db_path, "-e", "1", "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(rows[0]["clock_out"].is_null());
    assert_eq!(rows[0]["hours_worked"], 0.0);
}

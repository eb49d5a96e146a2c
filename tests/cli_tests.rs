use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_activity, activity_row, init_db_with_trip, setup_test_db, tc, temp_out};

#[test]
fn test_trip_add_and_list() {
    let db_path = setup_test_db("cli_trip_list");
    init_db_with_trip(&db_path);

    tc().args(["--db", &db_path, "trip", "list"])
        .assert()
        .success()
        .stdout(contains("Slovakia").and(contains("2026-09-01")));
}

#[test]
fn test_add_normalizes_time_before_storing() {
    let db_path = setup_test_db("cli_add_normalize");
    init_db_with_trip(&db_path);
    add_activity(&db_path, "restaurant", "Dinner", "2026-09-02", Some("7:30 PM"));

    assert_eq!(
        activity_row(&db_path, 1),
        ("2026-09-02T00:00:00Z".to_string(), Some("19:30".to_string()), None)
    );
}

#[test]
fn test_add_rejects_unknown_kind_and_trip() {
    let db_path = setup_test_db("cli_add_errors");
    init_db_with_trip(&db_path);

    tc().args([
        "--db", &db_path, "add", "--trip", "1", "--kind", "spaceship", "--title", "X", "--date",
        "2026-09-02",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid activity kind"));

    tc().args([
        "--db", &db_path, "add", "--trip", "9", "--kind", "site", "--title", "X", "--date",
        "2026-09-02",
    ])
    .assert()
    .failure()
    .stderr(contains("Trip not found: 9"));
}

#[test]
fn test_day_view_orders_and_colors_days() {
    let db_path = setup_test_db("cli_day_view");
    init_db_with_trip(&db_path);

    add_activity(&db_path, "hotel", "Villa check-in", "2026-09-02", Some("17:00"));
    add_activity(&db_path, "transportation", "Car pickup", "2026-09-02", Some("10:00"));
    add_activity(&db_path, "route", "Drive to Mikulas", "2026-09-02", Some("2:00 PM"));
    add_activity(&db_path, "site", "Cave", "2026-09-04", None);

    let out = tc()
        .args(["--db", &db_path, "day", "--trip", "1"])
        .output()
        .expect("run day");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let pickup = stdout.find("Car pickup").expect("pickup listed");
    let drive = stdout.find("Drive to Mikulas").expect("drive listed");
    let villa = stdout.find("Villa check-in").expect("villa listed");
    assert!(pickup < drive && drive < villa);

    assert!(stdout.contains("Day 1 · 2026-09-02"));
    assert!(stdout.contains("Day 3 · 2026-09-04"));
    assert!(stdout.contains("--:--"));

    tc().args(["--db", &db_path, "day", "--trip", "1", "--date", "2026-09-04"])
        .assert()
        .success()
        .stdout(contains("Cave").and(contains("Villa").not()));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("cli_export");
    init_db_with_trip(&db_path);
    add_activity(&db_path, "hotel", "Villa check-in", "2026-09-02", Some("17:00"));
    add_activity(&db_path, "transportation", "Car pickup", "2026-09-02", Some("10:00"));

    let json_path = temp_out("cli_export", "json");
    tc().args([
        "--db", &db_path, "export", "--trip", "1", "--format", "json", "--file", &json_path,
    ])
    .assert()
    .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json written")).unwrap();
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["title"], "Car pickup");
    assert_eq!(rows[0]["time"], "10:00");
    assert_eq!(rows[0]["day"], 1);
    assert_eq!(rows[1]["slot"], "Check-in");

    let csv_path = temp_out("cli_export", "csv");
    tc().args([
        "--db", &db_path, "export", "--trip", "1", "--format", "csv", "--file", &csv_path,
    ])
    .assert()
    .success();

    let csv = fs::read_to_string(&csv_path).expect("csv written");
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("day,date,color,time,instant"));
    assert!(lines.next().unwrap().contains("Car pickup"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_relative");
    init_db_with_trip(&db_path);
    add_activity(&db_path, "site", "Cave", "2026-09-02", None);

    tc().args([
        "--db", &db_path, "export", "--trip", "1", "--format", "csv", "--file", "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_strict_policy_from_config_rejects_malformed_time() {
    let db_path = setup_test_db("cli_strict_policy");
    init_db_with_trip(&db_path);

    let home = std::env::temp_dir().join("tripclock_strict_home");
    fs::create_dir_all(home.join(".tripclock")).unwrap();
    fs::write(
        home.join(".tripclock").join("tripclock.conf"),
        format!("database: \"{}\"\ntime_policy: strict\n", db_path),
    )
    .unwrap();

    tc().args([
        "add", "--trip", "1", "--kind", "site", "--title", "Cave", "--date", "2026-09-02",
        "--time", "25:99",
    ])
    .env("HOME", &home)
    .assert()
    .failure()
    .stderr(contains("Malformed time of day"));

    // Permissive (default) keeps the value and shows a placeholder.
    tc().args([
        "--db", &db_path, "add", "--trip", "1", "--kind", "site", "--title", "Cave", "--date",
        "2026-09-02", "--time", "25:99",
    ])
    .env("HOME", std::env::temp_dir().join("tripclock_permissive_home"))
    .assert()
    .success();

    tc().args(["config", "--print"])
        .env("HOME", &home)
        .assert()
        .success()
        .stdout(contains("time_policy: strict"));
}

#[test]
fn test_log_and_db_info() {
    let db_path = setup_test_db("cli_log_info");
    init_db_with_trip(&db_path);
    add_activity(&db_path, "site", "Cave", "2026-09-02", Some("09:00"));

    tc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("trip_add")));

    tc().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Trips:").and(contains("Integrity check passed")));
}

#[test]
fn test_strict_day_view_shows_placeholder_for_stored_malformed_time() {
    let db_path = setup_test_db("cli_strict_day_view");
    init_db_with_trip(&db_path);

    // Stored while the policy was permissive.
    add_activity(&db_path, "site", "Old town walk", "2026-09-02", Some("after lunch"));
    add_activity(&db_path, "restaurant", "Dinner", "2026-09-02", Some("19:00"));

    let home = std::env::temp_dir().join("tripclock_strict_view_home");
    fs::create_dir_all(home.join(".tripclock")).unwrap();
    fs::write(
        home.join(".tripclock").join("tripclock.conf"),
        format!("database: \"{}\"\ntime_policy: strict\n", db_path),
    )
    .unwrap();

    tc().args(["day", "--trip", "1"])
        .env("HOME", &home)
        .assert()
        .success()
        .stdout(
            contains("Old town walk")
                .and(contains("Dinner"))
                .and(contains("--:--"))
                .and(contains("Malformed time of day")),
        );

    let json_path = temp_out("cli_strict_day_view", "json");
    tc().args(["export", "--trip", "1", "--format", "json", "--file", &json_path])
        .env("HOME", &home)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json written")).unwrap();
    assert_eq!(json.as_array().expect("array").len(), 2);
    assert_eq!(json[0]["time"], "--:--");
}

#[test]
fn test_export_of_empty_trip_writes_nothing() {
    let db_path = setup_test_db("cli_export_empty");
    init_db_with_trip(&db_path);

    let csv_path = temp_out("cli_export_empty", "csv");
    tc().args([
        "--db", &db_path, "export", "--trip", "1", "--format", "csv", "--file", &csv_path,
    ])
    .assert()
    .success()
    .stdout(contains("No activities to export for trip 1"));

    assert!(!std::path::Path::new(&csv_path).exists());
}

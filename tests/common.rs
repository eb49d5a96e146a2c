#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tc() -> Command {
    cargo_bin_cmd!("tripclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tripclock.sqlite", name));
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

/// Initialize the DB and create one trip starting 2026-09-01 (id 1).
pub fn init_db_with_trip(db_path: &str) {
    tc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tc().args([
        "--db",
        db_path,
        "trip",
        "add",
        "--name",
        "Slovakia",
        "--start",
        "2026-09-01",
        "--destination",
        "Slovakia",
    ])
    .assert()
    .success();
}

/// Add an activity through the CLI.
pub fn add_activity(db_path: &str, kind: &str, title: &str, date: &str, time: Option<&str>) {
    let mut args = vec![
        "--db", db_path, "add", "--trip", "1", "--kind", kind, "--title", title, "--date", date,
    ];
    if let Some(t) = time {
        args.push("--time");
        args.push(t);
    }
    tc().args(&args).assert().success();
}

/// Add an activity stored in the pre-split combined-instant format.
pub fn add_legacy_activity(db_path: &str, kind: &str, title: &str, at: &str, origin: Option<&str>) {
    let mut args = vec![
        "--db",
        db_path,
        "add",
        "--trip",
        "1",
        "--kind",
        kind,
        "--title",
        title,
        "--legacy-at",
        at,
    ];
    if let Some(o) = origin {
        args.push("--origin");
        args.push(o);
    }
    tc().args(&args).assert().success();
}

/// Read back (starts_at, start_time, location) for one activity.
pub fn activity_row(db_path: &str, id: i64) -> (String, Option<String>, Option<String>) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(
        "SELECT starts_at, start_time, location FROM activities WHERE id = ?1",
        [id],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )
    .expect("activity row")
}

use rusqlite::Connection;
use tripclock::db::initialize::init_db;
use tripclock::db::migrate::pending_backfill_rows;

mod common;
use common::{setup_test_db, tc};

/// Database created before the split columns existed.
fn create_legacy_db(db_path: &str) {
    let conn = Connection::open(db_path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        INSERT INTO log (date, operation, target, message)
        VALUES (datetime('now'), 'migration_applied', '20260110_0001_create_trips_activities', 'base');

        CREATE TABLE trips (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            start_date  TEXT NOT NULL,
            destination TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );
        CREATE TABLE activities (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            trip_id     INTEGER NOT NULL REFERENCES trips(id) ON DELETE CASCADE,
            kind        TEXT NOT NULL,
            title       TEXT NOT NULL,
            origin      TEXT,
            destination TEXT,
            starts_at   TEXT NOT NULL,
            ends_at     TEXT,
            created_at  TEXT NOT NULL
        );

        INSERT INTO trips (name, start_date, destination, created_at)
        VALUES ('Slovakia', '2026-09-01', 'Slovakia', '2026-01-01T00:00:00Z');
        INSERT INTO activities (trip_id, kind, title, starts_at, ends_at, created_at)
        VALUES (1, 'hotel', 'Villa', '2026-09-02T17:00:00Z', '2026-09-05T10:00:00Z', '2026-01-01T00:00:00Z');
        INSERT INTO activities (trip_id, kind, title, starts_at, created_at)
        VALUES (1, 'site', 'Cave', '2026-09-03T00:00:00Z', '2026-01-01T00:00:00Z');
        "#,
    )
    .unwrap();
}

fn columns(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info('activities')").unwrap();
    stmt.query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn test_init_adds_split_columns_to_legacy_schema() {
    let db_path = setup_test_db("migration_legacy_schema");
    create_legacy_db(&db_path);

    let conn = Connection::open(&db_path).unwrap();
    init_db(&conn).unwrap();

    let cols = columns(&conn);
    for c in ["start_time", "end_time", "location"] {
        assert!(cols.iter().any(|x| x == c), "missing column {c}");
    }

    // Only the hotel row still carries combined instants.
    assert_eq!(pending_backfill_rows(&conn).unwrap(), 1);

    // Running again is a no-op.
    init_db(&conn).unwrap();
    assert_eq!(columns(&conn).len(), cols.len());
}

#[test]
fn test_db_migrate_reports_pending_backfill() {
    let db_path = setup_test_db("migration_cli_pending");
    create_legacy_db(&db_path);

    tc().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 activities still hold legacy instants"));

    tc().args([
        "--db",
        &db_path,
        "backfill",
        "--trip",
        "1",
        "--destination",
        "Slovakia",
        "--no-backup",
    ])
    .assert()
    .success();

    let conn = Connection::open(&db_path).unwrap();
    assert_eq!(pending_backfill_rows(&conn).unwrap(), 0);

    let (end_at, end_time): (String, Option<String>) = conn
        .query_row(
            "SELECT ends_at, end_time FROM activities WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(end_at, "2026-09-05T00:00:00Z");
    assert_eq!(end_time.as_deref(), Some("10:00"));
}

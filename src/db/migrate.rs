use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

const CREATE_TRIPS_ACTIVITIES: &str = "20260110_0001_create_trips_activities";
const SPLIT_ACTIVITY_TIME: &str = "20260302_0002_split_activity_time";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Column names of a table (empty if the table does not exist).
fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    cols.collect()
}

/// Base schema. `starts_at` / `ends_at` hold RFC 3339 instants: combined
/// day+time values for legacy rows, midnight anchors afterwards.
fn create_trips_and_activities(conn: &Connection) -> Result<()> {
    if is_applied(conn, CREATE_TRIPS_ACTIVITIES)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS trips (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            start_date   TEXT NOT NULL,
            destination  TEXT NOT NULL DEFAULT '',
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS activities (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            trip_id      INTEGER NOT NULL REFERENCES trips(id) ON DELETE CASCADE,
            kind         TEXT NOT NULL CHECK(kind IN ('transportation','hotel','site','restaurant','route')),
            title        TEXT NOT NULL,
            origin       TEXT,
            destination  TEXT,
            starts_at    TEXT NOT NULL,
            ends_at      TEXT,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_activities_trip_kind ON activities(trip_id, kind);
        "#,
    )?;

    mark_applied(conn, CREATE_TRIPS_ACTIVITIES, "Created trips and activities tables")?;
    success(format!("Migration applied: {}", CREATE_TRIPS_ACTIVITIES));
    Ok(())
}

/// Add the split time-of-day and location columns.
fn add_split_columns(conn: &Connection) -> Result<()> {
    if is_applied(conn, SPLIT_ACTIVITY_TIME)? {
        return Ok(());
    }

    let cols = table_columns(conn, "activities")?;
    let missing: Vec<&str> = ["start_time", "end_time", "location"]
        .into_iter()
        .filter(|c| !cols.iter().any(|existing| existing == c))
        .collect();

    if !missing.is_empty() {
        warning(format!(
            "Adding split time columns to activities: {}",
            missing.join(", ")
        ));
    }

    let tx = conn.unchecked_transaction()?;
    for col in &missing {
        tx.execute_batch(&format!("ALTER TABLE activities ADD COLUMN {} TEXT;", col))?;
    }
    mark_applied(
        &tx,
        SPLIT_ACTIVITY_TIME,
        "Added start_time, end_time and location to activities",
    )?;
    tx.commit()?;

    success(format!("Migration applied: {}", SPLIT_ACTIVITY_TIME));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db() every time a connection is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_trips_and_activities(conn)?;
    add_split_columns(conn)?;
    Ok(())
}

/// Count of legacy rows still carrying combined instants.
pub fn pending_backfill_rows(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM activities
         WHERE strftime('%H:%M:%S', starts_at) <> '00:00:00'
            OR (ends_at IS NOT NULL AND strftime('%H:%M:%S', ends_at) <> '00:00:00')",
        [],
        |row| row.get(0),
    )
}

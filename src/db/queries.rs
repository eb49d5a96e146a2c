use crate::errors::{AppError, AppResult};
use crate::models::activity::{ActivityRecord, ActivitySlot, DaySlot};
use crate::models::activity_kind::ActivityKind;
use crate::models::day_anchor::DayAnchor;
use crate::models::trip::Trip;
use crate::utils::date::parse_date;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ACTIVITY_COLUMNS: &str = "id, trip_id, kind, title, origin, destination,
     starts_at, start_time, ends_at, end_time, location, created_at";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

// ---------------------------
// Trips
// ---------------------------

fn map_trip(row: &Row) -> Result<Trip> {
    let start_str: String = row.get("start_date")?;
    let start = parse_date(&start_str)
        .map(DayAnchor::new)
        .ok_or_else(|| conversion_error(2, AppError::InvalidDate(start_str.clone())))?;

    Ok(Trip {
        id: row.get("id")?,
        name: row.get("name")?,
        start,
        destination: row.get("destination")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_trip(
    conn: &Connection,
    name: &str,
    start: DayAnchor,
    destination: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO trips (name, start_date, destination, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            name,
            start.to_string(),
            destination,
            Local::now().to_rfc3339()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_trip(conn: &Connection, trip_id: i64) -> AppResult<Trip> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, start_date, destination, created_at FROM trips WHERE id = ?1",
    )?;
    stmt.query_row([trip_id], map_trip)
        .optional()?
        .ok_or(AppError::TripNotFound(trip_id))
}

pub fn list_trips(conn: &Connection) -> AppResult<Vec<Trip>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, start_date, destination, created_at FROM trips
         ORDER BY start_date ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_trip)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Activities
// ---------------------------

fn map_slot(day: Option<String>, time: Option<String>, idx: usize) -> Result<Option<ActivitySlot>> {
    let Some(day) = day else {
        return Ok(None);
    };
    let day = DaySlot::from_db_str(&day).map_err(|e| conversion_error(idx, e))?;
    Ok(Some(ActivitySlot { day, time }))
}

pub fn map_activity(row: &Row) -> Result<ActivityRecord> {
    let kind_str: String = row.get("kind")?;
    let kind = ActivityKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidActivityKind(kind_str.clone())))?;

    let start = map_slot(row.get("starts_at")?, row.get("start_time")?, 6)?
        .ok_or_else(|| conversion_error(6, AppError::InvalidInstant("empty starts_at".into())))?;
    let end = map_slot(row.get("ends_at")?, row.get("end_time")?, 8)?;

    Ok(ActivityRecord {
        id: row.get("id")?,
        trip_id: row.get("trip_id")?,
        kind,
        title: row.get("title")?,
        origin: row.get("origin")?,
        destination: row.get("destination")?,
        start,
        end,
        location: row.get("location")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_activity(conn: &Connection, rec: &ActivityRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO activities (trip_id, kind, title, origin, destination,
                                 starts_at, start_time, ends_at, end_time, location, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            rec.trip_id,
            rec.kind.to_db_str(),
            rec.title,
            rec.origin,
            rec.destination,
            rec.start.day.to_db_str(),
            rec.start.time,
            rec.end.as_ref().map(|e| e.day.to_db_str()),
            rec.end.as_ref().and_then(|e| e.time.clone()),
            rec.location,
            rec.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All activities of a trip, in id order.
pub fn load_activities_by_trip(conn: &Connection, trip_id: i64) -> AppResult<Vec<ActivityRecord>> {
    let sql = format!(
        "SELECT {} FROM activities WHERE trip_id = ?1 ORDER BY id ASC",
        ACTIVITY_COLUMNS
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([trip_id], map_activity)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Activities of one kind within a trip, in id order.
pub fn load_activities_by_trip_and_kind(
    conn: &Connection,
    trip_id: i64,
    kind: ActivityKind,
) -> AppResult<Vec<ActivityRecord>> {
    let sql = format!(
        "SELECT {} FROM activities WHERE trip_id = ?1 AND kind = ?2 ORDER BY id ASC",
        ACTIVITY_COLUMNS
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(params![trip_id, kind.to_db_str()], map_activity)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Write back the split day/time/location fields of one activity.
///
/// Scoped by trip id as well as record id; returns the number of rows touched.
pub fn update_activity_split(conn: &Connection, rec: &ActivityRecord) -> Result<usize> {
    conn.execute(
        "UPDATE activities
         SET starts_at = ?1, start_time = ?2,
             ends_at = ?3, end_time = ?4,
             location = ?5
         WHERE id = ?6 AND trip_id = ?7",
        params![
            rec.start.day.to_db_str(),
            rec.start.time,
            rec.end.as_ref().map(|e| e.day.to_db_str()),
            rec.end.as_ref().and_then(|e| e.time.clone()),
            rec.location,
            rec.id,
            rec.trip_id,
        ],
    )
}

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_activity, insert_trip, load_trip};
use crate::errors::{AppError, AppResult};
use crate::models::activity::{ActivityRecord, ActivitySlot};
use crate::models::activity_kind::ActivityKind;
use crate::models::day_anchor::DayAnchor;
use crate::ui::messages::success;
use crate::utils::time::{TimePolicy, hhmm_to_time, normalize_time_of_day};
use chrono::{DateTime, NaiveDate, Utc};

/// One slot as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct SlotInput {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    /// Combined instant in the pre-split format.
    pub legacy_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ActivityInput {
    pub trip_id: i64,
    pub kind: ActivityKind,
    pub title: String,
    pub start: SlotInput,
    pub end: Option<SlotInput>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub location: Option<String>,
}

/// High-level business logic for the `add` and `trip add` commands.
pub struct AddLogic;

fn resolve_slot(input: &SlotInput, policy: TimePolicy) -> AppResult<ActivitySlot> {
    if let Some(instant) = input.legacy_at {
        return Ok(ActivitySlot::legacy(instant));
    }

    let date = input
        .date
        .ok_or_else(|| AppError::InvalidDate("missing date".into()))?;
    let time = normalize_time_of_day(input.time.as_deref(), policy);

    if policy.is_strict()
        && let Some(t) = &time
        && hhmm_to_time(t).is_none()
    {
        return Err(AppError::MalformedTimeOfDay(t.clone()));
    }

    Ok(ActivitySlot::split(DayAnchor::new(date), time))
}

impl AddLogic {
    pub fn add_trip(
        pool: &mut DbPool,
        name: &str,
        start: NaiveDate,
        destination: &str,
    ) -> AppResult<i64> {
        let id = insert_trip(&pool.conn, name, DayAnchor::new(start), destination)?;

        ttlog(
            &pool.conn,
            "trip_add",
            &format!("trip {}", id),
            &format!("{} starting {}", name, start),
        )?;
        success(format!("🧳 Trip #{} \"{}\" starts {}.", id, name, start));
        Ok(id)
    }

    pub fn add_activity(
        pool: &mut DbPool,
        input: &ActivityInput,
        policy: TimePolicy,
    ) -> AppResult<i64> {
        let trip = load_trip(&pool.conn, input.trip_id)?;

        let start = resolve_slot(&input.start, policy)?;
        let end = input
            .end
            .as_ref()
            .map(|e| resolve_slot(e, policy))
            .transpose()?;

        let mut rec = ActivityRecord::new(trip.id, input.kind, &input.title, start, end);
        rec.origin = input.origin.clone();
        rec.destination = input.destination.clone();
        rec.location = input.location.clone();

        let id = insert_activity(&pool.conn, &rec)?;

        let when = rec.start.describe();
        ttlog(
            &pool.conn,
            "add",
            &format!("trip {} / {}", trip.id, rec.kind),
            &format!("#{} {} at {}", id, rec.title, when),
        )?;

        let legacy_note = if rec.needs_backfill() {
            " (legacy instant, pending backfill)"
        } else {
            ""
        };
        success(format!(
            "Added {} #{} \"{}\" on {}{}.",
            rec.kind, id, rec.title, when, legacy_note
        ));

        Ok(id)
    }
}

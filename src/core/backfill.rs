//! One-shot backfill of legacy activities into the split day/time model.
//!
//! Legacy rows stored the intended local wall-clock reading inside a
//! UTC-labelled instant. The basis correction below reads hour and minute in
//! UTC and is only meant for that historical data; steady-state composition
//! lives in `calculator::compose`.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_activities_by_trip_and_kind, load_trip, update_activity_split};
use crate::errors::{AppError, AppResult};
use crate::models::activity::{ActivityRecord, ActivitySlot, DaySlot};
use crate::models::activity_kind::ActivityKind;
use crate::models::day_anchor::DayAnchor;
use crate::ui::messages::{header, info, step, success, warning};
use chrono::{DateTime, Timelike, Utc};
use rusqlite::Connection;

/// Split a legacy instant into its UTC day and `HH:MM`.
///
/// An instant already on UTC midnight (an anchor) yields the same anchor and
/// no time, so feeding the output back in changes nothing.
pub fn extract_legacy(instant: DateTime<Utc>) -> (DayAnchor, Option<String>) {
    let anchor = DayAnchor::new(instant.date_naive());
    let (h, m) = (instant.hour(), instant.minute());

    if h == 0 && m == 0 {
        (anchor, None)
    } else {
        (anchor, Some(format!("{:02}:{:02}", h, m)))
    }
}

/// Location tag for a record in a backfill batch.
///
/// Transportation leaving from one of the origin countries is tagged with that
/// country; everything else gets the batch destination.
pub fn classify_location(
    kind: ActivityKind,
    origin: Option<&str>,
    destination: &str,
    origin_countries: &[String],
) -> String {
    if kind == ActivityKind::Transportation
        && let Some(origin) = origin
    {
        let origin_lc = origin.to_lowercase();
        if let Some(country) = origin_countries
            .iter()
            .find(|c| !c.trim().is_empty() && origin_lc.contains(&c.trim().to_lowercase()))
        {
            return country.trim().to_string();
        }
    }
    destination.to_string()
}

fn backfill_slot(slot: &ActivitySlot) -> ActivitySlot {
    let (anchor, extracted) = extract_legacy(slot.day.as_utc());
    ActivitySlot {
        day: DaySlot::Anchor(anchor),
        // Already split rows keep their stored time.
        time: extracted.or_else(|| slot.time.clone()),
    }
}

/// The record as it should look after the backfill.
pub fn backfill_record(
    rec: &ActivityRecord,
    destination: &str,
    origin_countries: &[String],
) -> ActivityRecord {
    let mut out = rec.clone();
    out.start = backfill_slot(&rec.start);
    out.end = rec.end.as_ref().map(backfill_slot);
    out.location = Some(classify_location(
        rec.kind,
        rec.origin.as_deref(),
        destination,
        origin_countries,
    ));
    out
}

#[derive(Debug, Clone)]
pub struct BackfillPlan {
    pub trip_ids: Vec<i64>,
    pub kinds: Vec<ActivityKind>,
    pub destination: String,
    pub origin_countries: Vec<String>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillOutcome {
    pub scanned: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl BackfillOutcome {
    fn absorb(&mut self, other: BackfillOutcome) {
        self.scanned += other.scanned;
        self.updated += other.updated;
        self.unchanged += other.unchanged;
    }
}

pub struct BackfillLogic;

impl BackfillLogic {
    /// Run the backfill, one transaction per (trip, kind) batch.
    ///
    /// The first failing record aborts the run; its batch is rolled back and
    /// batches already committed stay in place. Dry runs roll every batch back.
    pub fn run(pool: &mut DbPool, plan: &BackfillPlan) -> AppResult<BackfillOutcome> {
        if plan.destination.trim().is_empty() {
            return Err(AppError::MissingRequiredConfiguration(
                "backfill destination (use --destination or backfill.destination)".into(),
            ));
        }

        // Fail before any write if a trip id is unknown.
        for trip_id in &plan.trip_ids {
            load_trip(&pool.conn, *trip_id)?;
        }

        let kinds: &[ActivityKind] = if plan.kinds.is_empty() {
            &ActivityKind::ALL
        } else {
            &plan.kinds
        };

        let mut total = BackfillOutcome::default();

        for trip_id in &plan.trip_ids {
            for kind in kinds {
                let tx = pool.transaction()?;
                let outcome = Self::run_batch(&tx, *trip_id, *kind, plan)?;

                if plan.dry_run {
                    tx.rollback()?;
                } else {
                    if outcome.scanned > 0 {
                        ttlog(
                            &tx,
                            "backfill",
                            &format!("trip {} / {}", trip_id, kind),
                            &format!(
                                "{} scanned, {} updated, {} unchanged",
                                outcome.scanned, outcome.updated, outcome.unchanged
                            ),
                        )?;
                    }
                    tx.commit()?;
                }

                total.absorb(outcome);
            }
        }

        Ok(total)
    }

    fn run_batch(
        conn: &Connection,
        trip_id: i64,
        kind: ActivityKind,
        plan: &BackfillPlan,
    ) -> AppResult<BackfillOutcome> {
        let records = load_activities_by_trip_and_kind(conn, trip_id, kind)?;
        let mut outcome = BackfillOutcome::default();

        if records.is_empty() {
            return Ok(outcome);
        }

        header(format!("Trip {} · {} ({} records)", trip_id, kind, records.len()));

        for rec in &records {
            outcome.scanned += 1;

            // Rows entered in the split model keep their day, time and location.
            if !rec.needs_backfill() {
                outcome.unchanged += 1;
                step(format!("{} #{} \"{}\" already split", kind, rec.id, rec.title));
                continue;
            }

            let next = backfill_record(rec, &plan.destination, &plan.origin_countries);

            let written = update_activity_split(conn, &next).map_err(|e| {
                AppError::MigrationWriteFailure {
                    trip_id,
                    kind: kind.to_string(),
                    id: rec.id,
                    reason: e.to_string(),
                }
            })?;
            if written != 1 {
                return Err(AppError::MigrationWriteFailure {
                    trip_id,
                    kind: kind.to_string(),
                    id: rec.id,
                    reason: format!("{} rows affected", written),
                });
            }

            outcome.updated += 1;
            step(describe_update(&next, plan.dry_run));
        }

        Ok(outcome)
    }

    /// Print the closing summary of a run.
    pub fn report(outcome: &BackfillOutcome, dry_run: bool) {
        if dry_run {
            info(format!(
                "Dry run: {} records scanned, {} would change, {} already split. Nothing written.",
                outcome.scanned, outcome.updated, outcome.unchanged
            ));
        } else if outcome.scanned == 0 {
            warning("No activities matched the selected trips and kinds.");
        } else {
            success(format!(
                "Backfill completed: {} records scanned, {} updated, {} already split.",
                outcome.scanned, outcome.updated, outcome.unchanged
            ));
        }
    }
}

fn describe_update(rec: &ActivityRecord, dry_run: bool) -> String {
    let verb = if dry_run { "would set" } else { "set" };
    let mut line = format!(
        "{} #{} \"{}\": {} start {}",
        rec.kind,
        rec.id,
        rec.title,
        verb,
        rec.start.describe(),
    );
    if let Some(end) = &rec.end {
        line.push_str(&format!(", end {}", end.describe()));
    }
    line.push_str(&format!(
        ", location {}",
        rec.location.as_deref().unwrap_or("")
    ));
    line
}

use crate::core::calculator::compose::{ComposedInstant, compose};
use crate::core::calculator::day_bucket::{DayColor, color_for_bucket, day_bucket};
use crate::models::activity::{ActivityRecord, DaySlot};
use crate::models::activity_kind::ActivityKind;
use crate::models::day_anchor::DayAnchor;
use crate::ui::messages::warning;
use crate::utils::time::{TimePolicy, normalize_time_of_day};
use serde::Serialize;

/// One slot of one activity, placed on the itinerary.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryEntry {
    pub activity_id: i64,
    pub kind: ActivityKind,
    pub slot: &'static str,
    pub title: String,
    pub instant: ComposedInstant,
    pub time: Option<String>,
    pub location: Option<String>,
    pub legacy: bool,
    #[serde(skip)]
    slot_index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayGroup {
    pub bucket: i64,
    pub day: DayAnchor,
    pub color: &'static DayColor,
    pub entries: Vec<ItineraryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Itinerary {
    pub trip_start: DayAnchor,
    pub days: Vec<DayGroup>,
}

impl Itinerary {
    pub fn entries(&self) -> impl Iterator<Item = &ItineraryEntry> {
        self.days.iter().flat_map(|d| d.entries.iter())
    }

    pub fn day(&self, anchor: DayAnchor) -> Option<&DayGroup> {
        self.days.iter().find(|d| d.day == anchor)
    }

    pub fn len(&self) -> usize {
        self.days.iter().map(|d| d.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

fn place_slot(
    record: &ActivityRecord,
    slot_index: usize,
    label: &'static str,
    day: &DaySlot,
    time: Option<&str>,
    policy: TimePolicy,
) -> ItineraryEntry {
    let (instant, time, legacy) = match day {
        DaySlot::Anchor(anchor) => {
            let time = normalize_time_of_day(time, policy);
            // Stored values are never rejected here; strict input checks happen on `add`.
            let instant = compose(*anchor, time.as_deref(), policy).unwrap_or_else(|e| {
                warning(format!(
                    "{} #{} \"{}\": {}; placed at start of day",
                    record.kind, record.id, record.title, e
                ));
                ComposedInstant::from(*anchor)
            });
            (instant, time, false)
        }
        // Not backfilled yet: the UTC label carries the local wall-clock reading.
        DaySlot::Legacy(dt) => {
            let naive = dt.naive_utc();
            (
                ComposedInstant::from(naive),
                Some(naive.format("%H:%M").to_string()),
                true,
            )
        }
    };

    ItineraryEntry {
        activity_id: record.id,
        kind: record.kind,
        slot: label,
        title: record.title.clone(),
        instant,
        time,
        location: record.location.clone(),
        legacy,
        slot_index,
    }
}

/// Place every slot of every activity, sort them and group them by day.
///
/// Entries sharing an instant are ordered by kind, then record id, then slot,
/// so the result does not depend on input order.
pub fn build_itinerary(
    trip_start: DayAnchor,
    activities: &[ActivityRecord],
    policy: TimePolicy,
) -> Itinerary {
    let mut entries = Vec::new();

    for record in activities {
        for (idx, (label, slot)) in record.slots().into_iter().enumerate() {
            entries.push(place_slot(
                record,
                idx,
                label,
                &slot.day,
                slot.time.as_deref(),
                policy,
            ));
        }
    }

    entries.sort_by_key(|e| (e.instant, e.kind.rank(), e.activity_id, e.slot_index));

    let mut days: Vec<DayGroup> = Vec::new();

    for entry in entries {
        let anchor = entry.instant.day_anchor();

        match days.last_mut() {
            Some(group) if group.day == anchor => group.entries.push(entry),
            _ => {
                let bucket = day_bucket(trip_start, anchor.instant());
                days.push(DayGroup {
                    bucket,
                    day: anchor,
                    color: color_for_bucket(bucket),
                    entries: vec![entry],
                });
            }
        }
    }

    Itinerary { trip_start, days }
}

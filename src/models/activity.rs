use super::{activity_kind::ActivityKind, day_anchor::DayAnchor};
use crate::errors::AppResult;
use crate::utils::date::parse_instant;
use crate::utils::time::display_time;
use chrono::{DateTime, Local, SecondsFormat, Utc};

/// The day value stored for one slot of an activity.
///
/// Rows written before the split model hold a full instant with the local
/// wall-clock reading stored under a UTC label; those stay `Legacy` until the
/// backfill rewrites them as anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySlot {
    Anchor(DayAnchor),
    Legacy(DateTime<Utc>),
}

impl DaySlot {
    pub fn from_db_str(s: &str) -> AppResult<Self> {
        let instant = parse_instant(s)?;
        Ok(match DayAnchor::from_midnight(instant.naive_utc()) {
            Some(anchor) => DaySlot::Anchor(anchor),
            None => DaySlot::Legacy(instant),
        })
    }

    pub fn to_db_str(&self) -> String {
        match self {
            DaySlot::Anchor(a) => a.to_db_str(),
            DaySlot::Legacy(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// The stored value read back as a UTC-labelled instant.
    pub fn as_utc(&self) -> DateTime<Utc> {
        match self {
            DaySlot::Anchor(a) => a.as_utc(),
            DaySlot::Legacy(dt) => *dt,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, DaySlot::Legacy(_))
    }
}

/// A day plus an optional `HH:MM`, e.g. a hotel check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySlot {
    pub day: DaySlot,
    pub time: Option<String>,
}

impl ActivitySlot {
    pub fn split(anchor: DayAnchor, time: Option<String>) -> Self {
        Self {
            day: DaySlot::Anchor(anchor),
            time,
        }
    }

    pub fn legacy(instant: DateTime<Utc>) -> Self {
        Self {
            day: DaySlot::Legacy(instant),
            time: None,
        }
    }

    /// `YYYY-MM-DD HH:MM` for humans; legacy rows show their raw UTC reading.
    pub fn describe(&self) -> String {
        match &self.day {
            DaySlot::Anchor(a) => format!("{} {}", a, display_time(self.time.as_deref())),
            DaySlot::Legacy(dt) => format!("{} UTC", dt.format("%Y-%m-%d %H:%M")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActivityRecord {
    pub id: i64,
    pub trip_id: i64,
    pub kind: ActivityKind,
    pub title: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub start: ActivitySlot,
    pub end: Option<ActivitySlot>,
    pub location: Option<String>,
    pub created_at: String,
}

impl ActivityRecord {
    /// New, not yet persisted record (`id = 0`).
    pub fn new(
        trip_id: i64,
        kind: ActivityKind,
        title: &str,
        start: ActivitySlot,
        end: Option<ActivitySlot>,
    ) -> Self {
        Self {
            id: 0,
            trip_id,
            kind,
            title: title.to_string(),
            origin: None,
            destination: None,
            start,
            end,
            location: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Slots in order, each with its display label.
    pub fn slots(&self) -> Vec<(&'static str, &ActivitySlot)> {
        let (start_label, end_label) = self.kind.slot_labels();
        let mut out = vec![(start_label, &self.start)];
        if let Some(end) = &self.end {
            out.push((end_label, end));
        }
        out
    }

    pub fn needs_backfill(&self) -> bool {
        self.start.day.is_legacy() || self.end.as_ref().is_some_and(|e| e.day.is_legacy())
    }
}

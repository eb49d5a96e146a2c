//! Day anchor + time of day → one sortable instant.

use crate::errors::{AppError, AppResult};
use crate::models::day_anchor::DayAnchor;
use crate::utils::time::{TimePolicy, hhmm_to_time};
use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Derived instant used for ordering and display. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ComposedInstant(NaiveDateTime);

impl ComposedInstant {
    pub fn instant(&self) -> NaiveDateTime {
        self.0
    }

    pub fn day_anchor(&self) -> DayAnchor {
        DayAnchor::new(self.0.date())
    }

    pub fn time_of_day(&self) -> String {
        self.0.format("%H:%M").to_string()
    }

    /// Inverse of [`compose`] for canonical `HH:MM` inputs.
    pub fn decompose(&self) -> (DayAnchor, String) {
        (self.day_anchor(), self.time_of_day())
    }
}

impl From<DayAnchor> for ComposedInstant {
    fn from(anchor: DayAnchor) -> Self {
        Self(anchor.instant())
    }
}

impl From<NaiveDateTime> for ComposedInstant {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl fmt::Display for ComposedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// Set the anchor's wall-clock hour and minute from `time`.
///
/// No time means midnight: the result equals the anchor. A time that does not
/// split into a valid hour and minute is `MalformedTimeOfDay` under the strict
/// policy and midnight otherwise.
pub fn compose(
    anchor: DayAnchor,
    time: Option<&str>,
    policy: TimePolicy,
) -> AppResult<ComposedInstant> {
    let Some(raw) = time else {
        return Ok(ComposedInstant::from(anchor));
    };

    match hhmm_to_time(raw) {
        Some(clock) => Ok(ComposedInstant(anchor.date().and_time(clock))),
        None if policy.is_strict() => Err(AppError::MalformedTimeOfDay(raw.to_string())),
        None => Ok(ComposedInstant(anchor.date().and_time(NaiveTime::MIN))),
    }
}

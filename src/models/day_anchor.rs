use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::Serialize;
use std::fmt;

/// Midnight of a calendar day, carrying no time-of-day.
///
/// Only the date is stored, so the time component is zero by construction.
/// Persisted as `YYYY-MM-DDT00:00:00Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DayAnchor(NaiveDate);

impl DayAnchor {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Wall-clock instant of the anchor (always 00:00:00).
    pub fn instant(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    /// Accepts only instants that already sit on midnight.
    pub fn from_midnight(dt: NaiveDateTime) -> Option<Self> {
        if dt.time().num_seconds_from_midnight() == 0 && dt.time().nanosecond() == 0 {
            Some(Self(dt.date()))
        } else {
            None
        }
    }

    /// The anchor labelled as a UTC instant, the way rows are stored.
    pub fn as_utc(&self) -> DateTime<Utc> {
        self.instant().and_utc()
    }

    pub fn to_db_str(&self) -> String {
        self.instant().format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl fmt::Display for DayAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for DayAnchor {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

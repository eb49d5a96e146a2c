//! Time-of-day utilities: normalizing heterogeneous clock strings to `HH:MM`,
//! the display placeholder, and the strict/permissive parsing policy.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Rendered in place of a missing time of day.
pub const TIME_PLACEHOLDER: &str = "--:--";

static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid canonical time regex"));

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(AM|PM)?$").expect("valid 12-hour time regex")
});

/// How strictly time strings are treated.
///
/// `Permissive` passes unrecognized strings through and falls back to
/// midnight on malformed values; `Strict` warns on unrecognized strings and
/// rejects malformed ones when composing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePolicy {
    #[default]
    Permissive,
    Strict,
}

impl TimePolicy {
    pub fn is_strict(&self) -> bool {
        matches!(self, TimePolicy::Strict)
    }
}

/// Convert a clock string to canonical 24-hour `HH:MM`.
///
/// Strings already shaped like `HH:MM` are returned as-is. `H:MM` and
/// `H:MM AM|PM` are converted. Anything else, including 12-hour input that
/// would land outside `00:00..=23:59`, is an `UnrecognizedTimeFormat`.
pub fn parse_time_of_day(input: &str) -> AppResult<String> {
    if CANONICAL_RE.is_match(input) {
        return Ok(input.to_string());
    }

    let caps = CLOCK_RE
        .captures(input)
        .ok_or_else(|| AppError::UnrecognizedTimeFormat(input.to_string()))?;

    let mut hours: u32 = caps[1]
        .parse()
        .map_err(|_| AppError::UnrecognizedTimeFormat(input.to_string()))?;
    let minutes = &caps[2];

    match caps.get(3).map(|m| m.as_str().to_ascii_uppercase()).as_deref() {
        Some("PM") if hours != 12 => hours += 12,
        Some("AM") if hours == 12 => hours = 0,
        _ => {}
    }

    let mins: u32 = minutes
        .parse()
        .map_err(|_| AppError::UnrecognizedTimeFormat(input.to_string()))?;
    if hours > 23 || mins > 59 {
        return Err(AppError::UnrecognizedTimeFormat(input.to_string()));
    }

    Ok(format!("{:02}:{}", hours, minutes))
}

/// Normalize an optional time string; never fails.
///
/// Unrecognized input is passed through unchanged. Under the strict policy
/// a warning is printed for it.
pub fn normalize_time_of_day(input: Option<&str>, policy: TimePolicy) -> Option<String> {
    let raw = input?;

    match parse_time_of_day(raw) {
        Ok(t) => Some(t),
        Err(e) => {
            if policy.is_strict() {
                warning(e);
            }
            Some(raw.to_string())
        }
    }
}

/// Display form of an optional time: canonical `HH:MM`, or `--:--` when the
/// value is missing or cannot be read as a clock time.
pub fn display_time(input: Option<&str>) -> String {
    input
        .and_then(|raw| parse_time_of_day(raw).ok())
        .filter(|t| hhmm_to_time(t).is_some())
        .unwrap_or_else(|| TIME_PLACEHOLDER.to_string())
}

/// Split a canonical `HH:MM` into a clock time, if it is a valid one.
pub fn hhmm_to_time(s: &str) -> Option<NaiveTime> {
    let (h, m) = s.split_once(':')?;
    let hour = h.trim().parse::<u32>().ok()?;
    let minute = m.trim().parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

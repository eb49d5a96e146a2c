//! Trip-relative day index and the cyclic day palette.

use crate::models::day_anchor::DayAnchor;
use chrono::NaiveDateTime;
use serde::Serialize;

pub const PALETTE_SIZE: usize = 8;

const MS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayColor {
    pub name: &'static str,
    pub hex: &'static str,
    #[serde(skip)]
    pub ansi: &'static str,
}

/// Fixed day colors, in assignment order.
pub static PALETTE: [DayColor; PALETTE_SIZE] = [
    DayColor { name: "blue", hex: "#3b82f6", ansi: "\x1b[38;5;33m" },
    DayColor { name: "green", hex: "#22c55e", ansi: "\x1b[38;5;41m" },
    DayColor { name: "orange", hex: "#f97316", ansi: "\x1b[38;5;208m" },
    DayColor { name: "purple", hex: "#a855f7", ansi: "\x1b[38;5;135m" },
    DayColor { name: "red", hex: "#ef4444", ansi: "\x1b[38;5;203m" },
    DayColor { name: "teal", hex: "#14b8a6", ansi: "\x1b[38;5;37m" },
    DayColor { name: "pink", hex: "#ec4899", ansi: "\x1b[38;5;205m" },
    DayColor { name: "amber", hex: "#f59e0b", ansi: "\x1b[38;5;214m" },
];

/// Whole days from the trip start to `event`, floored.
///
/// Negative for events before the trip starts.
pub fn day_bucket(trip_start: DayAnchor, event: NaiveDateTime) -> i64 {
    let diff_ms = (event - trip_start.instant()).num_milliseconds();
    diff_ms.div_euclid(MS_PER_DAY)
}

/// Palette slot for a bucket; floor-modulo keeps pre-trip days in range.
pub fn color_index(bucket: i64) -> usize {
    bucket.rem_euclid(PALETTE_SIZE as i64) as usize
}

pub fn color_for_bucket(bucket: i64) -> &'static DayColor {
    &PALETTE[color_index(bucket)]
}

pub fn day_color(trip_start: DayAnchor, event: NaiveDateTime) -> &'static DayColor {
    color_for_bucket(day_bucket(trip_start, event))
}

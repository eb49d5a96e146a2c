use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Transportation,
    Hotel,
    Site,
    Restaurant,
    Route,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::Transportation,
        ActivityKind::Hotel,
        ActivityKind::Site,
        ActivityKind::Restaurant,
        ActivityKind::Route,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ActivityKind::Transportation => "transportation",
            ActivityKind::Hotel => "hotel",
            ActivityKind::Site => "site",
            ActivityKind::Restaurant => "restaurant",
            ActivityKind::Route => "route",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "transportation" => Some(ActivityKind::Transportation),
            "hotel" => Some(ActivityKind::Hotel),
            "site" => Some(ActivityKind::Site),
            "restaurant" => Some(ActivityKind::Restaurant),
            "route" => Some(ActivityKind::Route),
            _ => None,
        }
    }

    /// CLI input: DB names plus a few common aliases, any case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "transport" | "transfer" | "flight" | "train" => Some(ActivityKind::Transportation),
            "stay" | "accommodation" => Some(ActivityKind::Hotel),
            "tourist-site" | "sight" | "visit" => Some(ActivityKind::Site),
            "dinner" | "reservation" => Some(ActivityKind::Restaurant),
            "drive" | "hike" => Some(ActivityKind::Route),
            other => Self::from_db_str(other),
        }
    }

    /// Labels of the start slot and of the optional end slot.
    pub fn slot_labels(&self) -> (&'static str, &'static str) {
        match self {
            ActivityKind::Transportation => ("Departure", "Arrival"),
            ActivityKind::Hotel => ("Check-in", "Check-out"),
            ActivityKind::Site => ("Visit", "Leave"),
            ActivityKind::Restaurant => ("Reservation", "Leave"),
            ActivityKind::Route => ("Start", "Finish"),
        }
    }

    /// Tie-break when two entries share the same instant.
    pub fn rank(&self) -> u8 {
        match self {
            ActivityKind::Hotel => 0,
            ActivityKind::Transportation => 1,
            ActivityKind::Route => 2,
            ActivityKind::Site => 3,
            ActivityKind::Restaurant => 4,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

use super::day_anchor::DayAnchor;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    pub id: i64,
    pub name: String,
    pub start: DayAnchor,       // ⇔ trips.start_date (TEXT "YYYY-MM-DD")
    pub destination: String,    // ⇔ trips.destination (TEXT, default '')
    pub created_at: String,     // ⇔ trips.created_at (TEXT, ISO8601)
}

use crate::core::calculator::timeline::Itinerary;
use crate::utils::time::display_time;
use serde::Serialize;

/// Flat itinerary row for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct ItineraryRow {
    pub day: i64,
    pub date: String,
    pub color: String,
    pub time: String,
    pub instant: String,
    pub kind: String,
    pub slot: String,
    pub activity_id: i64,
    pub title: String,
    pub location: String,
    pub legacy: bool,
}

pub(crate) fn itinerary_rows(itinerary: &Itinerary) -> Vec<ItineraryRow> {
    itinerary
        .days
        .iter()
        .flat_map(|day| {
            day.entries.iter().map(move |e| ItineraryRow {
                day: day.bucket,
                date: day.day.to_string(),
                color: day.color.name.to_string(),
                time: display_time(e.time.as_deref()),
                instant: e.instant.instant().format("%Y-%m-%dT%H:%M").to_string(),
                kind: e.kind.to_db_str().to_string(),
                slot: e.slot.to_string(),
                activity_id: e.activity_id,
                title: e.title.clone(),
                location: e.location.clone().unwrap_or_default(),
                legacy: e.legacy,
            })
        })
        .collect()
}

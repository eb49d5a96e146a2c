pub mod add;
pub mod backfill;
pub mod backup;
pub mod calculator;
pub mod itinerary;
pub mod log;

pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use time::{TIME_PLACEHOLDER, display_time, normalize_time_of_day};

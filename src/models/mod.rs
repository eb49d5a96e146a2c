pub mod activity;
pub mod activity_kind;
pub mod day_anchor;
pub mod trip;

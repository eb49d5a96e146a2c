pub mod compose;
pub mod day_bucket;
pub mod timeline;

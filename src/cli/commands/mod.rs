pub mod add;
pub mod backfill;
pub mod config;
pub mod day;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod trip;

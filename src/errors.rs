//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unrecognized time format: {0}")]
    UnrecognizedTimeFormat(String),

    #[error("Malformed time of day: {0}")]
    MalformedTimeOfDay(String),

    #[error("Invalid activity kind: {0}")]
    InvalidActivityKind(String),

    #[error("Invalid stored instant: {0}")]
    InvalidInstant(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Trip not found: {0}")]
    TripNotFound(i64),

    // ---------------------------
    // Backfill errors
    // ---------------------------
    #[error("Backfill write failed for {kind} #{id} (trip {trip_id}): {reason}")]
    MigrationWriteFailure {
        trip_id: i64,
        kind: String,
        id: i64,
        reason: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Missing required configuration: {0}")]
    MissingRequiredConfiguration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

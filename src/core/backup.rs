use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use chrono::Local;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

fn zip_error(stage: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Io(io::Error::other(format!("Backup failed ({}): {}", stage, e)))
}

/// Zip the database file next to itself before a data-mutating run.
///
/// Returns `None` when there is no file on disk to copy (e.g. `:memory:`).
pub fn backup_before_backfill(db_path: &str) -> AppResult<Option<PathBuf>> {
    let src = Path::new(db_path);
    if db_path.is_empty() || !src.is_file() {
        warning("Could not locate the database file, backup skipped.");
        return Ok(None);
    }

    let backup_name = format!(
        "{}-backup_pre_backfill.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let backup_path = src
        .parent()
        .map(|p| p.join(&backup_name))
        .unwrap_or_else(|| PathBuf::from(&backup_name));

    let file = File::create(&backup_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "database.sqlite".to_string());

    zip.start_file(entry_name, options)
        .map_err(|e| zip_error("start_file", e))?;

    let content = fs::read(src)?;
    zip.write_all(&content)?;
    zip.finish().map_err(|e| zip_error("finish", e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(Some(backup_path))
}

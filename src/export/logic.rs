use crate::config::Config;
use crate::core::itinerary::ItineraryLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::itinerary_rows;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of a trip itinerary.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the sorted, day-grouped itinerary of `trip_id` to `file`.
    ///
    /// `file` must be absolute (a leading `~/` is expanded).
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        trip_id: i64,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let (_, itinerary) = ItineraryLogic::load(pool, trip_id, cfg)?;
        if itinerary.is_empty() {
            warning(format!("No activities to export for trip {}.", trip_id));
            return Ok(());
        }

        let rows = itinerary_rows(&itinerary);

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog(
            &pool.conn,
            "export",
            &format!("trip {}", trip_id),
            &format!("{} entries as {} to {}", rows.len(), format.as_str(), path.display()),
        )?;

        Ok(())
    }
}

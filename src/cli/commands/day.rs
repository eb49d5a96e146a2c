use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::itinerary::ItineraryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::require_date;

/// Print the day-grouped itinerary of a trip.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { trip, date } = cmd {
        let only = date.as_deref().map(require_date).transpose()?;
        let pool = DbPool::new(cfg.require_database()?)?;
        ItineraryLogic::print_days(&pool, *trip, only, cfg)?;
    }
    Ok(())
}

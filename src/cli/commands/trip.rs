use crate::cli::parser::{Commands, TripAction};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::itinerary::ItineraryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::require_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trip { action } = cmd {
        let mut pool = DbPool::new(cfg.require_database()?)?;

        match action {
            TripAction::Add {
                name,
                start,
                destination,
            } => {
                let start = require_date(start)?;
                AddLogic::add_trip(&mut pool, name, start, destination)?;
            }
            TripAction::List => ItineraryLogic::print_trips(&pool)?,
        }
    }
    Ok(())
}

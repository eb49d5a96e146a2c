use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{ActivityInput, AddLogic, SlotInput};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::activity_kind::ActivityKind;
use crate::utils::date::{parse_instant, require_date};

fn slot_input(
    date: Option<&str>,
    time: Option<&String>,
    legacy_at: Option<&str>,
) -> AppResult<SlotInput> {
    Ok(SlotInput {
        date: date.map(require_date).transpose()?,
        time: time.cloned(),
        legacy_at: legacy_at.map(parse_instant).transpose()?,
    })
}

/// Add an activity to a trip.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        trip,
        kind,
        title,
        date,
        time,
        end_date,
        end_time,
        origin,
        destination,
        location,
        legacy_at,
        legacy_end_at,
    } = cmd
    {
        let kind = ActivityKind::from_code(kind).ok_or_else(|| {
            AppError::InvalidActivityKind(format!(
                "'{}'. Use one of: transportation, hotel, site, restaurant, route",
                kind
            ))
        })?;

        let start = slot_input(date.as_deref(), time.as_ref(), legacy_at.as_deref())?;

        let end = if end_date.is_some() || legacy_end_at.is_some() {
            Some(slot_input(
                end_date.as_deref(),
                end_time.as_ref(),
                legacy_end_at.as_deref(),
            )?)
        } else {
            None
        };

        let input = ActivityInput {
            trip_id: *trip,
            kind,
            title: title.clone(),
            start,
            end,
            origin: origin.clone(),
            destination: destination.clone(),
            location: location.clone(),
        };

        let mut pool = DbPool::new(cfg.require_database()?)?;
        AddLogic::add_activity(&mut pool, &input, cfg.time_policy)?;
    }

    Ok(())
}

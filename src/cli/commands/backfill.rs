use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backfill::{BackfillLogic, BackfillPlan};
use crate::core::backup::backup_before_backfill;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::activity_kind::ActivityKind;
use crate::ui::messages::info;

/// Rewrite legacy activities of the selected trips into the split model.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backfill {
        trips,
        kinds,
        destination,
        origin_countries,
        dry_run,
        no_backup,
    } = cmd
    {
        let kinds = kinds
            .iter()
            .map(|k| {
                ActivityKind::from_code(k).ok_or_else(|| AppError::InvalidActivityKind(k.clone()))
            })
            .collect::<AppResult<Vec<_>>>()?;

        // Flags win over the config file.
        let plan = BackfillPlan {
            trip_ids: trips.clone(),
            kinds,
            destination: destination
                .clone()
                .unwrap_or_else(|| cfg.backfill.destination.clone()),
            origin_countries: if origin_countries.is_empty() {
                cfg.backfill.origin_countries.clone()
            } else {
                origin_countries.clone()
            },
            dry_run: *dry_run,
        };

        let db_path = cfg.require_database()?;
        let mut pool = DbPool::new(db_path)?;

        if *dry_run {
            info("Dry run: changes are shown but rolled back.");
        } else if !*no_backup && !plan.destination.trim().is_empty() {
            backup_before_backfill(db_path)?;
        }

        let outcome = BackfillLogic::run(&mut pool, &plan)?;
        BackfillLogic::report(&outcome, plan.dry_run);
    }

    Ok(())
}

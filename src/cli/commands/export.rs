use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        trip,
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(cfg.require_database()?)?;
        ExportLogic::export(&pool, cfg, *trip, *format, file, *force)?;
    }
    Ok(())
}

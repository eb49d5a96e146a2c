use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::error;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;

/// Handle the `init` command
///
/// Creates the config directory, the configuration file (skipped in test
/// mode) and the SQLite database with every pending migration applied.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli
        .db
        .as_deref()
        .map(|p| expand_tilde(p).to_string_lossy().to_string());
    let cfg = Config::init_all(custom, cli.test)?;
    let db_path = cfg.require_database()?.to_string();

    println!("⚙️  Initializing tripclock…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // Non-blocking: a failed audit row does not undo the init.
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        error(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 tripclock initialization completed!");
    Ok(())
}

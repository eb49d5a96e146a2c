use crate::db::migrate::pending_backfill_rows;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let db_path = pool.path();
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    let trips: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM trips", [], |row| row.get(0))?;
    let activities: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM activities", [], |row| row.get(0))?;
    let pending = pending_backfill_rows(&pool.conn)?;

    println!("{}• Trips:{} {}{}{}", CYAN, RESET, GREEN, trips, RESET);
    println!(
        "{}• Activities:{} {}{}{}",
        CYAN, RESET, GREEN, activities, RESET
    );
    let pending_color = if pending > 0 { YELLOW } else { GREY };
    println!(
        "{}• Pending backfill:{} {}{}{}",
        CYAN, RESET, pending_color, pending, RESET
    );

    //
    // 3) TRIP RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_date FROM trips ORDER BY start_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_date FROM trips ORDER BY start_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Trip starts:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!();

    Ok(())
}

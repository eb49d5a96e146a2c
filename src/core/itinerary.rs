use crate::config::Config;
use crate::core::calculator::timeline::{DayGroup, Itinerary, ItineraryEntry, build_itinerary};
use crate::db::pool::DbPool;
use crate::db::queries::{list_trips, load_activities_by_trip, load_trip};
use crate::errors::AppResult;
use crate::models::day_anchor::DayAnchor;
use crate::models::trip::Trip;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{BOLD, GREY, RESET, YELLOW, colorize_optional, paint};
use crate::utils::date::weekday_label;
use crate::utils::formatting::{bold, pad_right, truncate};
use crate::utils::time::display_time;
use chrono::NaiveDate;

pub struct ItineraryLogic;

impl ItineraryLogic {
    /// Load a trip and build its day-grouped itinerary.
    pub fn load(pool: &DbPool, trip_id: i64, cfg: &Config) -> AppResult<(Trip, Itinerary)> {
        let trip = load_trip(&pool.conn, trip_id)?;
        let activities = load_activities_by_trip(&pool.conn, trip_id)?;
        let itinerary = build_itinerary(trip.start, &activities, cfg.time_policy);
        Ok((trip, itinerary))
    }

    /// Print the day view, optionally for a single date.
    pub fn print_days(
        pool: &DbPool,
        trip_id: i64,
        only: Option<NaiveDate>,
        cfg: &Config,
    ) -> AppResult<()> {
        let (trip, itinerary) = Self::load(pool, trip_id, cfg)?;

        println!(
            "🧳 {} #{} · starts {}",
            bold(&trip.name),
            trip.id,
            trip.start
        );
        println!();

        let days: Vec<&DayGroup> = match only {
            Some(d) => itinerary.day(DayAnchor::new(d)).into_iter().collect(),
            None => itinerary.days.iter().collect(),
        };

        if days.is_empty() {
            match only {
                Some(d) => info(format!("No activities on {}.", d)),
                None => info("No activities for this trip yet."),
            }
            return Ok(());
        }

        for day in days {
            print_day(day, cfg);
        }

        let pending = itinerary.entries().filter(|e| e.legacy).count();
        if pending > 0 {
            warning(format!(
                "{} entries still use legacy combined instants; run `tripclock backfill --trip {}`.",
                pending, trip.id
            ));
        }

        Ok(())
    }

    pub fn print_trips(pool: &DbPool) -> AppResult<()> {
        let trips = list_trips(&pool.conn)?;
        if trips.is_empty() {
            info("No trips yet.");
            return Ok(());
        }

        println!(
            "{BOLD}{:>4}  {:<10}  {:<28}  {}{RESET}",
            "ID", "Start", "Name", "Destination"
        );
        for t in trips {
            println!(
                "{:>4}  {:<10}  {}  {}",
                t.id,
                t.start.to_string(),
                pad_right(&truncate(&t.name, 28), 28),
                colorize_optional(&t.destination)
            );
        }
        Ok(())
    }
}

fn print_day(day: &DayGroup, cfg: &Config) {
    let weekday = weekday_label(day.day.date(), cfg.show_weekday)
        .map(|w| format!(" {}", w))
        .unwrap_or_default();

    let heading = format!(
        "Day {} · {}{} · {}",
        day.bucket, day.day, weekday, day.color.name
    );
    println!("{}", paint(&format!("{BOLD}{heading}"), day.color.ansi));

    for entry in &day.entries {
        println!("{}", format_entry(entry));
    }
    println!();
}

fn format_entry(entry: &ItineraryEntry) -> String {
    let time = colorize_optional(&display_time(entry.time.as_deref()));
    let legacy = if entry.legacy {
        format!(" {YELLOW}(legacy){RESET}")
    } else {
        String::new()
    };
    let location = entry
        .location
        .as_deref()
        .map(|l| format!("{GREY}{}{RESET}", l))
        .unwrap_or_default();

    format!(
        "  {}  {}  {}  {}  {}{}",
        time,
        pad_right(entry.kind.to_db_str(), 14),
        pad_right(entry.slot, 11),
        pad_right(&truncate(&entry.title, 32), 32),
        location,
        legacy
    )
}

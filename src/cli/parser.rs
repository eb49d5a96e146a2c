use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tripclock
#[derive(Parser)]
#[command(
    name = "tripclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Itinerary time keeping for trips: day anchors, local times, day colours and legacy backfill on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum TripAction {
    /// Create a trip
    Add {
        /// Trip name
        #[arg(long)]
        name: String,

        /// First day of the trip (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Main destination (used as default location label)
        #[arg(long, default_value = "")]
        destination: String,
    },

    /// List trips
    List,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Manage trips
    Trip {
        #[command(subcommand)]
        action: TripAction,
    },

    /// Add an activity (transportation, hotel, site, restaurant, route) to a trip
    Add {
        #[arg(long)]
        trip: i64,

        /// transportation | hotel | site | restaurant | route
        #[arg(long)]
        kind: String,

        #[arg(long)]
        title: String,

        /// Day of the activity (YYYY-MM-DD)
        #[arg(long, required_unless_present = "legacy_at", conflicts_with = "legacy_at")]
        date: Option<String>,

        /// Local time (HH:MM, H:MM AM/PM)
        #[arg(long, requires = "date")]
        time: Option<String>,

        /// End day, e.g. hotel check-out (YYYY-MM-DD)
        #[arg(long = "end-date", conflicts_with = "legacy_end_at")]
        end_date: Option<String>,

        /// End local time
        #[arg(long = "end-time", requires = "end_date")]
        end_time: Option<String>,

        /// Origin (transportation)
        #[arg(long)]
        origin: Option<String>,

        /// Destination (transportation)
        #[arg(long)]
        destination: Option<String>,

        /// Location label
        #[arg(long)]
        location: Option<String>,

        /// Store a combined RFC 3339 instant in the pre-split format
        #[arg(long = "legacy-at", hide = true)]
        legacy_at: Option<String>,

        /// End instant in the pre-split format
        #[arg(long = "legacy-end-at", hide = true, requires = "legacy_at")]
        legacy_end_at: Option<String>,
    },

    /// Show the itinerary of a trip grouped by day
    Day {
        #[arg(long)]
        trip: i64,

        /// Show a single day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Export the itinerary of a trip
    Export {
        #[arg(long)]
        trip: i64,

        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Rewrite legacy combined instants as day + local time + location
    Backfill {
        /// Trip id to process (repeatable)
        #[arg(long = "trip", required = true)]
        trips: Vec<i64>,

        /// Restrict to these kinds (repeatable; default: all)
        #[arg(long = "kind")]
        kinds: Vec<String>,

        /// Destination location label (overrides config)
        #[arg(long)]
        destination: Option<String>,

        /// Origin country recognised in transportation origins (repeatable; overrides config)
        #[arg(long = "origin-country")]
        origin_countries: Vec<String>,

        /// Show what would change without writing
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Skip the zip backup taken before a real run
        #[arg(long = "no-backup")]
        no_backup: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

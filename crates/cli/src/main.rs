//! Marshal check-in CLI - import, geofence and permission tools.
//!
//! # Usage
//!
//! ```bash
//! # Expand combined name cells from a CSV import
//! checkin names "Mike and Jenna Jones, Killian Murphy + 1"
//!
//! # Classify a checkpoint into areas
//! checkin areas --areas areas.json --lat 53.3498 --lon -6.2603
//!
//! # Measure distance against the check-in radius
//! checkin distance --from 53.3498,-6.2603 --to 53.3500,-6.2600
//!
//! # See what a person can see of an event's marshals
//! checkin contacts --snapshot event.json --person p-123
//!
//! # Try a check-in against a snapshot
//! checkin check-in --snapshot event.json --assignment a-1 --lat 53.3498 --lon -6.2603
//! ```
//!
//! # Commands
//!
//! - `names` - Expand marshal name cells
//! - `areas` - Checkpoint area assignment
//! - `distance` - Haversine distance and radius check
//! - `contacts` - Contact permission audit
//! - `check-in` - Dry-run check-in validation

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use marshal_checkin_core::geo::Point;
use marshal_checkin_core::{AreaId, AssignmentId, CheckInMethod, MarshalId, PersonId};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CliConfig, LogFormat};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "checkin")]
#[command(author, version, about = "Marshal check-in tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand combined marshal name cells into individual names
    Names {
        /// Name cells, e.g. "Mike and Jenna Jones, Killian Murphy + 1"
        cells: Vec<String>,

        /// Read additional cells from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print JSON with each input and its names
        #[arg(long)]
        json: bool,
    },
    /// Print the areas a checkpoint at the given position belongs to
    Areas {
        /// JSON file with the event's area rows
        #[arg(short, long)]
        areas: PathBuf,

        /// Checkpoint latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Checkpoint longitude
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Fallback area ID (overrides `CHECKIN_DEFAULT_AREA_ID`)
        #[arg(long)]
        default_area: Option<String>,
    },
    /// Distance between two points and whether it is within the check-in radius
    Distance {
        /// First point as `lat,lon`
        #[arg(long, value_parser = commands::distance::parse_point, allow_hyphen_values = true)]
        from: Point,

        /// Second point as `lat,lon`
        #[arg(long, value_parser = commands::distance::parse_point, allow_hyphen_values = true)]
        to: Point,

        /// Radius in meters (overrides `CHECKIN_RADIUS_METERS`)
        #[arg(short, long)]
        radius: Option<f64>,
    },
    /// Show an event's marshals as a given person would see them
    Contacts {
        /// JSON export of the event's rows
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Person making the request
        #[arg(short, long)]
        person: String,

        /// Marshal record the person is acting as
        #[arg(short, long)]
        marshal: Option<String>,
    },
    /// Apply a check-in to an assignment in a snapshot and print the result
    CheckIn {
        /// JSON export of the event's rows
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Assignment to check in
        #[arg(short, long)]
        assignment: String,

        /// Check-in method (`gps`, `manual`, `admin`)
        #[arg(short, long, default_value = "gps")]
        method: CheckInMethod,

        /// Reported latitude
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        /// Reported longitude
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing to stderr so stdout stays clean for command output.
fn init_tracing(format: LogFormat) {
    // Defaults to info level if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "marshal_checkin_cli=info,marshal_checkin_core=info".into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Names { cells, file, json } => {
            commands::names::expand(&cells, file.as_deref(), json).await?;
        }
        Commands::Areas {
            areas,
            lat,
            lon,
            default_area,
        } => {
            let default_area_id = default_area.map_or_else(|| config.default_area_id.clone(), AreaId::new);
            commands::areas::classify(&areas, Point::new(lat, lon), &default_area_id).await?;
        }
        Commands::Distance { from, to, radius } => {
            let radius = radius.unwrap_or(config.check_in_radius_meters);
            commands::distance::measure(from, to, radius)?;
        }
        Commands::Contacts {
            snapshot,
            person,
            marshal,
        } => {
            commands::contacts::audit(&snapshot, PersonId::new(person), marshal.map(MarshalId::new))
                .await?;
        }
        Commands::CheckIn {
            snapshot,
            assignment,
            method,
            lat,
            lon,
        } => {
            let position = lat.zip(lon).map(|(lat, lon)| Point::new(lat, lon));
            commands::check_in::run(
                &snapshot,
                &AssignmentId::new(assignment),
                method,
                position,
                config.check_in_policy(),
            )
            .await?;
        }
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lightway_cli::commands::lights::{handle_lights, LightsArgs};
use lightway_cli::commands::variants::{handle_variants, VariantsArgs};
use lightway_cli::commands::{OutputFormat, ScorerArg};
use lightway_lib::{resolve_streetlights_path, GeoPoint};

#[derive(Parser, Debug)]
#[command(author, version, about = "Score walking routes by streetlight coverage")]
struct Cli {
    /// Streetlight GeoJSON dataset. Defaults to $LIGHTWAY_STREETLIGHTS, then
    /// data/street_lights.geojson.
    #[arg(long, global = true)]
    lights: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score the routes in a saved directions response and pick the
    /// fastest, balanced and most-lit variants.
    Variants {
        /// Directions provider response (JSON file).
        #[arg(long)]
        directions: PathBuf,
        /// Light score formula.
        #[arg(long, value_enum, default_value_t = ScorerArg::Composite)]
        scorer: ScorerArg,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report streetlights around a point.
    Lights {
        /// Latitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Search radius in meters.
        #[arg(long, default_value_t = 30.0)]
        radius: f64,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let lights_path = resolve_streetlights_path(cli.lights.as_deref());

    match cli.command {
        Command::Variants {
            directions,
            scorer,
            format,
        } => handle_variants(
            &lights_path,
            &VariantsArgs {
                directions,
                strategy: scorer.into(),
                format,
            },
        ),
        Command::Lights {
            lat,
            lng,
            radius,
            json,
        } => handle_lights(
            &lights_path,
            &LightsArgs {
                point: GeoPoint::new(lat, lng),
                radius_meters: radius,
                json,
            },
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

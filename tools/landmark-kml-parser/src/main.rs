use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use treasure_hunt_core::{
    config::{GEOFENCE_EXPIRATION_IN_SECONDS, GEOFENCE_RADIUS_IN_METERS, HuntConfig, LandmarkEntry},
    identifiers::LandmarkIdentifier,
};

mod kml;

#[derive(Parser, Debug)]
#[command(
    name = "landmark-kml-parser",
    author,
    version,
    about = "Compile a KML file of placemarks into a treasure hunt landmark table",
    long_about = "Reads Point placemarks from a KML file in document order and writes the \
                  JSON hunt configuration loaded by the game. Placemark names become \
                  landmark ids, descriptions become hints."
)]
struct Args {
    /// Input KML file
    input: PathBuf,

    /// Output JSON file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Geofence radius in meters
    #[arg(long, default_value_t = GEOFENCE_RADIUS_IN_METERS)]
    radius: f64,

    /// Geofence expiration in seconds
    #[arg(long, default_value_t = GEOFENCE_EXPIRATION_IN_SECONDS)]
    expiry: u64,

    /// Don't ask for background location (hosts older than Android 10)
    #[arg(long)]
    foreground_only: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    if !args.input.exists() {
        bail!("Input file does not exist: {}", args.input.display());
    }

    let data = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let xml = String::from_utf8_lossy(&data);

    let placemarks = kml::parse_placemarks(&xml)?;
    log::info!("Found {} point placemarks", placemarks.len());

    let landmarks = placemarks
        .into_iter()
        .map(|placemark| {
            let id = kml::slugify(&placemark.name);
            log::debug!("{} -> {id}", placemark.name);
            LandmarkEntry {
                id: LandmarkIdentifier::new(id),
                latitude: placemark.latitude,
                longitude: placemark.longitude,
                hint: placemark.description.unwrap_or_default(),
                found_message: format!("You found {}!", placemark.name),
            }
        })
        .collect();

    let config = HuntConfig {
        geofence_radius_meters: args.radius,
        geofence_expiration_secs: args.expiry,
        require_background_location: !args.foreground_only,
        landmarks,
    };
    config.validate().context("Landmark table is not valid")?;

    let json = config.to_json_string()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!(
                "Wrote {} landmarks to {}",
                config.landmarks.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

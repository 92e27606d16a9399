//! Lights command handler: inspect the streetlight index around a point.

use std::path::Path;

use anyhow::{ensure, Result};
use serde::Serialize;

use lightway_lib::{load_streetlights, GeoPoint};

/// How many nearby lights to list in the output.
const NEARBY_LIMIT: usize = 10;

/// Arguments for the lights command.
#[derive(Debug, Clone)]
pub struct LightsArgs {
    pub point: GeoPoint,
    pub radius_meters: f64,
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NearbyLight {
    #[serde(flatten)]
    position: GeoPoint,
    distance_meters: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LightsOutput {
    point: GeoPoint,
    radius_meters: f64,
    streetlights: usize,
    within_radius: usize,
    /// `None` when the index is empty.
    nearest_meters: Option<f64>,
    nearby: Vec<NearbyLight>,
}

/// Handle the lights subcommand.
pub fn handle_lights(lights_path: &Path, args: &LightsArgs) -> Result<()> {
    ensure!(
        args.point.is_finite(),
        "latitude and longitude must be finite numbers"
    );
    ensure!(
        args.radius_meters.is_finite() && args.radius_meters >= 0.0,
        "radius must be a non-negative number of meters"
    );

    let index = load_streetlights(lights_path);
    let within = index.within_radius(args.point, args.radius_meters);
    let nearest = index.nearest_distance(args.point);

    let output = LightsOutput {
        point: args.point,
        radius_meters: args.radius_meters,
        streetlights: index.len(),
        within_radius: within.len(),
        nearest_meters: nearest.is_finite().then_some(nearest),
        nearby: within
            .into_iter()
            .take(NEARBY_LIMIT)
            .map(|(position, distance_meters)| NearbyLight {
                position,
                distance_meters,
            })
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Streetlights loaded: {}", output.streetlights);
    println!(
        "Within {} m of ({}, {}): {}",
        output.radius_meters, output.point.lat, output.point.lng, output.within_radius
    );
    match output.nearest_meters {
        Some(meters) => println!("Nearest light: {meters:.1} m"),
        None => println!("Nearest light: none (no streetlight data)"),
    }
    for light in &output.nearby {
        println!(
            "  - {:.6}, {:.6} ({:.1} m)",
            light.position.lat, light.position.lng, light.distance_meters
        );
    }

    Ok(())
}

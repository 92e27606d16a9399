#![allow(dead_code)]

use std::path::PathBuf;

use lightway_lib::{DirectionsResponse, RouteCandidate, StreetlightIndex};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn streetlights_path() -> PathBuf {
    fixtures_dir().join("street_lights.geojson")
}

pub fn fixture_index() -> StreetlightIndex {
    StreetlightIndex::from_geojson_path(&streetlights_path()).expect("fixture dataset loads")
}

pub fn fixture_candidates() -> Vec<RouteCandidate> {
    let source =
        std::fs::read_to_string(fixtures_dir().join("directions.json")).expect("read directions");
    DirectionsResponse::from_json(&source)
        .expect("directions parse")
        .into_candidates()
        .expect("directions map")
}

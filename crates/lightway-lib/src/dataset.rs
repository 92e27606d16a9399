//! Streetlight dataset location and loading.
//!
//! The dataset is a GeoJSON `FeatureCollection` of point features. Loading has
//! two flavours:
//!
//! - [`StreetlightIndex::from_geojson_path`] and friends are strict and return
//!   an [`Error`] when the source cannot be read or parsed.
//! - [`load_streetlights`] is what services call at startup: any failure is
//!   logged and the index degrades to empty, so scoring keeps answering with
//!   the neutral score instead of taking the process down.

use std::env;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::spatial::StreetlightIndex;

/// Environment variable consulted when no dataset path is given explicitly.
pub const STREETLIGHTS_ENV_VAR: &str = "LIGHTWAY_STREETLIGHTS";

/// Dataset location used when neither a path nor the environment variable is set.
const DEFAULT_STREETLIGHTS_PATH: &str = "data/street_lights.geojson";

/// Resolve the streetlight dataset path.
///
/// Precedence: the explicit path, then [`STREETLIGHTS_ENV_VAR`], then
/// `data/street_lights.geojson` relative to the working directory.
pub fn resolve_streetlights_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    match env::var_os(STREETLIGHTS_ENV_VAR) {
        Some(value) if !value.is_empty() => {
            debug!(env = STREETLIGHTS_ENV_VAR, "using streetlight dataset from environment");
            PathBuf::from(value)
        }
        _ => PathBuf::from(DEFAULT_STREETLIGHTS_PATH),
    }
}

impl StreetlightIndex {
    /// Read a GeoJSON dataset from disk.
    pub fn from_geojson_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        info!(path = %path.display(), "loading streetlights");
        let file = File::open(path)?;
        Self::from_geojson_reader(BufReader::new(file))
    }

    /// Parse a GeoJSON document from a reader.
    ///
    /// A document without a `features` array produces an empty index and a
    /// warning rather than an error.
    pub fn from_geojson_reader<R: Read>(reader: R) -> Result<Self> {
        let document: Value = serde_json::from_reader(reader)?;
        Ok(Self::from_geojson_value(&document))
    }

    /// Parse a GeoJSON document held in memory.
    pub fn from_geojson_str(source: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(source)?;
        Ok(Self::from_geojson_value(&document))
    }

    fn from_geojson_value(document: &Value) -> Self {
        match document.get("features").and_then(Value::as_array) {
            Some(features) => Self::from_features(features),
            None => {
                warn!("streetlight dataset has no 'features' array");
                Self::empty()
            }
        }
    }
}

/// Load the streetlight dataset, degrading to an empty index on failure.
///
/// Failures are reported through `tracing` only; callers always get an index.
pub fn load_streetlights(path: &Path) -> StreetlightIndex {
    match StreetlightIndex::from_geojson_path(path) {
        Ok(index) => index,
        Err(err) => {
            error!(
                path = %path.display(),
                error = %err,
                "failed to load streetlights; routes will receive neutral scores"
            );
            StreetlightIndex::empty()
        }
    }
}

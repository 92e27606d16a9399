use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// One alternative walking route, as derived from a directions provider.
///
/// `path` holds the route's waypoints (step boundaries), not a dense polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCandidate {
    pub path: Vec<GeoPoint>,
    /// Route length. Absent or zero falls back to 1 km when scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub duration_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersections: Option<Vec<GeoPoint>>,
    /// Highest road speed limit along the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    /// Opaque provider payload. Never serialized and never copied into variants.
    #[serde(skip)]
    pub raw: Option<serde_json::Value>,
}

impl RouteCandidate {
    pub fn new(path: Vec<GeoPoint>, distance_km: Option<f64>, duration_minutes: f64) -> Self {
        Self {
            path,
            distance_km,
            duration_minutes,
            distance_text: None,
            duration_text: None,
            intersections: None,
            max_speed: None,
            raw: None,
        }
    }

    /// Reject values the light score formula would turn into NaN or nonsense.
    ///
    /// Scoring itself does not call this; the provider mapping does, so bad
    /// upstream data fails loudly before it reaches the scorer.
    pub fn validate(&self) -> Result<()> {
        if let Some(distance) = self.distance_km {
            if !distance.is_finite() || distance < 0.0 {
                return Err(invalid(format!(
                    "distanceKm must be a non-negative number, got {distance}"
                )));
            }
        }
        if !self.duration_minutes.is_finite() || self.duration_minutes < 0.0 {
            return Err(invalid(format!(
                "durationMinutes must be a non-negative number, got {}",
                self.duration_minutes
            )));
        }
        if let Some(speed) = self.max_speed {
            if !speed.is_finite() || speed < 0.0 {
                return Err(invalid(format!(
                    "maxSpeed must be a non-negative number, got {speed}"
                )));
            }
        }
        if let Some(point) = self.path.iter().find(|p| !p.is_finite()) {
            return Err(invalid(format!("path point {point:?} has non-finite coordinates")));
        }
        if let Some(point) = self
            .intersections
            .iter()
            .flatten()
            .find(|p| !p.is_finite())
        {
            return Err(invalid(format!(
                "intersection {point:?} has non-finite coordinates"
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> Error {
    Error::InvalidCandidate { reason }
}

/// A candidate paired with its light score in `[0, 10]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: RouteCandidate,
    pub light_score: f64,
}

impl ScoredCandidate {
    pub fn new(candidate: RouteCandidate, light_score: f64) -> Self {
        Self {
            candidate,
            light_score,
        }
    }
}

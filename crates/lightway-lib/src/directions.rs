//! Directions provider response model and mapping to route candidates.
//!
//! The provider returns one route per alternative, each with a single walking
//! leg made of steps. Only the fields the scorer needs are modelled; the full
//! route JSON rides along on the candidate as its opaque `raw` payload.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::candidate::RouteCandidate;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Status string the provider uses for a successful response.
const STATUS_OK: &str = "OK";

/// Top-level provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    /// Routes kept as JSON so each candidate can carry its raw payload.
    #[serde(default)]
    pub routes: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProviderRoute {
    #[serde(default)]
    legs: Vec<ProviderLeg>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProviderLeg {
    distance: TextValue,
    duration: TextValue,
    end_location: LatLng,
    #[serde(default)]
    steps: Vec<ProviderStep>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProviderStep {
    start_location: LatLng,
    end_location: LatLng,
    #[serde(default)]
    speed_limit: Option<f64>,
}

/// A numeric value with the provider's display text (meters or seconds).
#[derive(Debug, Clone, Deserialize)]
struct TextValue {
    value: f64,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for GeoPoint {
    fn from(value: LatLng) -> Self {
        GeoPoint::new(value.lat, value.lng)
    }
}

impl DirectionsResponse {
    /// Parse a provider response from JSON text.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Convert every provider route into a validated [`RouteCandidate`].
    ///
    /// Fails on a non-OK status, a route that does not match the expected
    /// shape, or a route whose numbers do not pass
    /// [`RouteCandidate::validate`].
    pub fn into_candidates(self) -> Result<Vec<RouteCandidate>> {
        if self.status != STATUS_OK {
            return Err(Error::ProviderStatus {
                status: self.status,
                message: self.error_message,
            });
        }

        let candidates = self
            .routes
            .into_iter()
            .enumerate()
            .map(|(position, raw)| route_to_candidate(position, raw))
            .collect::<Result<Vec<_>>>()?;

        debug!(routes = candidates.len(), "mapped directions routes");
        Ok(candidates)
    }
}

fn route_to_candidate(position: usize, raw: Value) -> Result<RouteCandidate> {
    let invalid = |reason: String| Error::InvalidRoute {
        route: position,
        reason,
    };

    let route: ProviderRoute =
        serde_json::from_value(raw.clone()).map_err(|err| invalid(err.to_string()))?;
    let leg = route
        .legs
        .into_iter()
        .next()
        .ok_or_else(|| invalid("route has no legs".to_string()))?;

    let mut path: Vec<GeoPoint> = leg
        .steps
        .iter()
        .map(|step| step.start_location.into())
        .collect();
    path.push(leg.end_location.into());

    let intersections = if leg.steps.len() >= 2 {
        Some(
            leg.steps[..leg.steps.len() - 1]
                .iter()
                .map(|step| step.end_location.into())
                .collect(),
        )
    } else {
        None
    };

    let max_speed = leg
        .steps
        .iter()
        .filter_map(|step| step.speed_limit)
        .reduce(f64::max);

    let candidate = RouteCandidate {
        path,
        distance_km: Some(leg.distance.value / 1000.0),
        duration_minutes: leg.duration.value / 60.0,
        distance_text: leg.distance.text,
        duration_text: leg.duration.text,
        intersections,
        max_speed,
        raw: Some(raw),
    };

    candidate.validate().map_err(|err| match err {
        Error::InvalidCandidate { reason } => invalid(reason),
        other => other,
    })?;
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn step(from: (f64, f64), to: (f64, f64)) -> Value {
        json!({
            "start_location": { "lat": from.0, "lng": from.1 },
            "end_location": { "lat": to.0, "lng": to.1 },
        })
    }

    fn response(routes: Vec<Value>) -> DirectionsResponse {
        serde_json::from_value(json!({ "status": "OK", "routes": routes })).expect("valid response")
    }

    fn route(distance_m: f64, duration_s: f64, steps: Vec<Value>, end: (f64, f64)) -> Value {
        json!({
            "summary": "test",
            "legs": [{
                "distance": { "value": distance_m, "text": format!("{} m", distance_m) },
                "duration": { "value": duration_s, "text": format!("{} s", duration_s) },
                "end_location": { "lat": end.0, "lng": end.1 },
                "steps": steps,
            }]
        })
    }

    #[test]
    fn maps_units_and_path() {
        let steps = vec![step((1.0, 1.0), (2.0, 2.0)), step((2.0, 2.0), (3.0, 3.0))];
        let candidates = response(vec![route(1_500.0, 900.0, steps, (3.0, 3.0))])
            .into_candidates()
            .expect("maps");

        let candidate = &candidates[0];
        assert_eq!(candidate.distance_km, Some(1.5));
        assert_eq!(candidate.duration_minutes, 15.0);
        assert_eq!(candidate.distance_text.as_deref(), Some("1500 m"));
        assert_eq!(
            candidate.path,
            vec![
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(2.0, 2.0),
                GeoPoint::new(3.0, 3.0)
            ]
        );
        assert_eq!(candidate.intersections, Some(vec![GeoPoint::new(2.0, 2.0)]));
        assert!(candidate.raw.is_some());
    }

    #[test]
    fn single_step_route_has_no_intersections() {
        let candidates = response(vec![route(
            100.0,
            60.0,
            vec![step((1.0, 1.0), (1.001, 1.0))],
            (1.001, 1.0),
        )])
        .into_candidates()
        .expect("maps");
        assert_eq!(candidates[0].intersections, None);
        assert_eq!(candidates[0].path.len(), 2);
    }

    #[test]
    fn max_speed_is_highest_step_limit() {
        let mut fast = step((1.0, 1.0), (2.0, 2.0));
        fast["speed_limit"] = json!(60.0);
        let mut slow = step((2.0, 2.0), (3.0, 3.0));
        slow["speed_limit"] = json!(30.0);
        let plain = step((3.0, 3.0), (4.0, 4.0));

        let candidates = response(vec![route(10.0, 10.0, vec![slow, fast, plain], (4.0, 4.0))])
            .into_candidates()
            .expect("maps");
        assert_eq!(candidates[0].max_speed, Some(60.0));
    }

    #[test]
    fn non_ok_status_is_an_error() {
        let response = DirectionsResponse::from_json(
            r#"{"status":"REQUEST_DENIED","error_message":"bad key","routes":[]}"#,
        )
        .expect("parses");
        let err = response.into_candidates().unwrap_err();
        assert!(matches!(
            err,
            Error::ProviderStatus { ref status, .. } if status == "REQUEST_DENIED"
        ));
    }

    #[test]
    fn route_without_legs_is_rejected() {
        let err = response(vec![json!({ "legs": [] })])
            .into_candidates()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRoute { route: 0, .. }));
    }

    #[test]
    fn negative_distance_is_rejected() {
        let err = response(vec![
            route(10.0, 10.0, vec![], (1.0, 1.0)),
            route(-10.0, 10.0, vec![], (1.0, 1.0)),
        ])
        .into_candidates()
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRoute { route: 1, .. }));
    }

    #[test]
    fn ok_with_no_routes_is_empty() {
        let candidates = response(vec![]).into_candidates().expect("maps");
        assert!(candidates.is_empty());
    }
}

//! Geographic primitives shared by the index and the scorers.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters used by every distance computation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a point from a GeoJSON-ordered `[longitude, latitude]` pair.
    pub const fn from_lng_lat(lng: f64, lat: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Earth-centred Cartesian coordinates in meters on a spherical Earth.
    ///
    /// The straight-line (chord) distance between two such vectors never
    /// exceeds the great-circle distance between the points, and grows
    /// monotonically with it.
    pub(crate) fn to_cartesian(self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lng = self.lng.to_radians();
        [
            EARTH_RADIUS_METERS * lat.cos() * lng.cos(),
            EARTH_RADIUS_METERS * lat.cos() * lng.sin(),
            EARTH_RADIUS_METERS * lat.sin(),
        ]
    }
}

/// Great-circle (haversine) distance between two points, in meters.
///
/// Non-finite coordinates propagate to a non-finite result.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_METERS * c
}

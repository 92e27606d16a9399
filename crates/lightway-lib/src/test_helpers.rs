// Test-only helpers for `lightway-lib` tests
#![allow(dead_code)]
use crate::candidate::{RouteCandidate, ScoredCandidate};
use crate::geo::GeoPoint;

/// Builder to create `RouteCandidate` instances in tests with sensible defaults.
pub struct CandidateBuilder {
    candidate: RouteCandidate,
}

impl CandidateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidate: RouteCandidate::new(Vec::new(), Some(1.0), 10.0),
        }
    }

    pub fn point(mut self, lat: f64, lng: f64) -> Self {
        self.candidate.path.push(GeoPoint::new(lat, lng));
        self
    }

    pub fn path(mut self, points: &[GeoPoint]) -> Self {
        self.candidate.path = points.to_vec();
        self
    }

    pub fn distance_km(mut self, km: f64) -> Self {
        self.candidate.distance_km = Some(km);
        self
    }

    pub fn no_distance(mut self) -> Self {
        self.candidate.distance_km = None;
        self
    }

    pub fn duration(mut self, minutes: f64) -> Self {
        self.candidate.duration_minutes = minutes;
        self
    }

    pub fn intersection(mut self, lat: f64, lng: f64) -> Self {
        self.candidate
            .intersections
            .get_or_insert_with(Vec::new)
            .push(GeoPoint::new(lat, lng));
        self
    }

    pub fn max_speed(mut self, speed: f64) -> Self {
        self.candidate.max_speed = Some(speed);
        self
    }

    pub fn text(mut self, distance: &str, duration: &str) -> Self {
        self.candidate.distance_text = Some(distance.to_string());
        self.candidate.duration_text = Some(duration.to_string());
        self
    }

    pub fn build(self) -> RouteCandidate {
        self.candidate
    }

    pub fn scored(self, light_score: f64) -> ScoredCandidate {
        ScoredCandidate::new(self.candidate, light_score)
    }
}

impl Default for CandidateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

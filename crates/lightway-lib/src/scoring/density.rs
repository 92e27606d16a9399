use crate::candidate::RouteCandidate;
use crate::spatial::StreetlightIndex;

use super::{LightScorer, MAX_SCORE, NEAR_LIGHT_RADIUS_METERS, NEUTRAL_SCORE};

/// Floor of the density-only scale; a route with no nearby lights scores this.
const DENSITY_FLOOR: f64 = 2.0;

/// Average lights per waypoint at which the density-only score saturates.
const SATURATION_LIGHTS_PER_POINT: f64 = 10.0;

/// Density-only scorer.
///
/// `score = clamp(avg / 10 * 8 + 2, 2, 10)` where `avg` is the mean number of
/// streetlights within 30 m of each waypoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct DensityScorer;

impl LightScorer for DensityScorer {
    fn name(&self) -> &'static str {
        "density"
    }

    fn score(&self, candidate: &RouteCandidate, index: &StreetlightIndex) -> f64 {
        if candidate.path.is_empty() || index.is_empty() {
            return NEUTRAL_SCORE;
        }

        let total: usize = candidate
            .path
            .iter()
            .map(|point| index.count_within_radius(*point, NEAR_LIGHT_RADIUS_METERS))
            .sum();
        let average = total as f64 / candidate.path.len() as f64;

        let span = MAX_SCORE - DENSITY_FLOOR;
        (average / SATURATION_LIGHTS_PER_POINT * span + DENSITY_FLOOR)
            .clamp(DENSITY_FLOOR, MAX_SCORE)
    }
}

use serde::Serialize;
use tracing::trace;

use crate::candidate::RouteCandidate;
use crate::spatial::StreetlightIndex;

use super::{LightScorer, MAX_SCORE, NEAR_LIGHT_RADIUS_METERS, NEUTRAL_SCORE};

const DENSITY_WEIGHT: f64 = 40.0;
/// Lights per kilometre at which the density term saturates.
const DENSITY_SATURATION_PER_KM: f64 = 10.0;

const CLOSENESS_WEIGHT: f64 = 25.0;
/// Average nearest-light distance at which the closeness term reaches zero.
const CLOSENESS_RANGE_METERS: f64 = 100.0;

const DARK_POINT_PENALTY: f64 = 2.0;
const DARK_PENALTY_CAP: f64 = 20.0;

const LIT_INTERSECTION_BONUS: f64 = 2.0;
const INTERSECTION_BONUS_CAP: f64 = 10.0;

const SPEED_PENALTY: f64 = 5.0;

/// Divisor taking the raw term sum onto the `[0, 10]` scale.
const RAW_SCALE: f64 = 10.0;

/// Tunable thresholds for [`CompositeScorer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeParams {
    /// Radius within which a light counts towards density, and within which a
    /// light makes an intersection count as lit (strictly closer).
    pub near_light_radius_m: f64,
    /// Waypoints farther than this from every light are dark.
    pub dark_zone_threshold_m: f64,
    /// Routes whose `max_speed` exceeds this are penalised.
    pub speed_threshold: f64,
    /// Route length assumed when the candidate's distance is absent or zero.
    pub fallback_distance_km: f64,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            near_light_radius_m: NEAR_LIGHT_RADIUS_METERS,
            dark_zone_threshold_m: 80.0,
            speed_threshold: 50.0,
            fallback_distance_km: 1.0,
        }
    }
}

/// Every term that went into a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Sum over waypoints of lights within the near-light radius.
    pub lights_near: usize,
    pub lights_per_km: f64,
    pub average_nearest_m: f64,
    pub dark_points: usize,
    /// 0 to 40.
    pub density: f64,
    /// 0 to 25.
    pub closeness: f64,
    /// 0 to 20, subtracted.
    pub dark_penalty: f64,
    /// 0 to 10.
    pub intersection_bonus: f64,
    /// 0 or 5, subtracted.
    pub speed_penalty: f64,
    pub raw: f64,
    /// Final score, `raw / 10` clamped to `[0, 10]`.
    pub score: f64,
}

/// The multi-term light score.
///
/// ```text
/// raw   = density + closeness + intersection_bonus - dark_penalty - speed_penalty
/// score = clamp(raw / 10, 0, 10)
/// ```
///
/// Malformed numbers (negative or NaN distance) are not guarded here and
/// surface as out-of-range or NaN scores; see [`RouteCandidate::validate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeScorer {
    params: CompositeParams,
}

impl CompositeScorer {
    pub fn new(params: CompositeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CompositeParams {
        &self.params
    }

    /// Compute every term of the score.
    ///
    /// Returns `None` when the neutral score applies (empty path or empty index).
    pub fn breakdown(
        &self,
        candidate: &RouteCandidate,
        index: &StreetlightIndex,
    ) -> Option<ScoreBreakdown> {
        if candidate.path.is_empty() || index.is_empty() {
            return None;
        }
        let params = &self.params;

        let mut lights_near = 0usize;
        let mut nearest_total = 0.0;
        let mut dark_points = 0usize;
        for point in &candidate.path {
            lights_near += index.count_within_radius(*point, params.near_light_radius_m);
            let nearest = index.nearest_distance(*point);
            nearest_total += nearest;
            if nearest > params.dark_zone_threshold_m {
                dark_points += 1;
            }
        }

        let distance_km = match candidate.distance_km {
            Some(km) if km != 0.0 => km,
            _ => params.fallback_distance_km,
        };
        let lights_per_km = lights_near as f64 / distance_km;
        let density = at_most(lights_per_km / DENSITY_SATURATION_PER_KM, 1.0) * DENSITY_WEIGHT;

        let average_nearest_m = nearest_total / candidate.path.len() as f64;
        let closeness = at_least_zero(
            (CLOSENESS_RANGE_METERS - average_nearest_m) / CLOSENESS_RANGE_METERS,
        ) * CLOSENESS_WEIGHT;

        let dark_penalty = (dark_points as f64 * DARK_POINT_PENALTY).min(DARK_PENALTY_CAP);

        let intersection_bonus = candidate.intersections.as_ref().map_or(0.0, |crossings| {
            let lit = crossings
                .iter()
                .filter(|crossing| index.nearest_distance(**crossing) < params.near_light_radius_m)
                .count();
            (lit as f64 * LIT_INTERSECTION_BONUS).min(INTERSECTION_BONUS_CAP)
        });

        let speed_penalty = match candidate.max_speed {
            Some(speed) if speed > params.speed_threshold => SPEED_PENALTY,
            _ => 0.0,
        };

        let raw = density + closeness + intersection_bonus - dark_penalty - speed_penalty;
        let score = (raw / RAW_SCALE).clamp(0.0, MAX_SCORE);

        let breakdown = ScoreBreakdown {
            lights_near,
            lights_per_km,
            average_nearest_m,
            dark_points,
            density,
            closeness,
            dark_penalty,
            intersection_bonus,
            speed_penalty,
            raw,
            score,
        };
        trace!(?breakdown, "composite light score");
        Some(breakdown)
    }
}

impl LightScorer for CompositeScorer {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn score(&self, candidate: &RouteCandidate, index: &StreetlightIndex) -> f64 {
        self.breakdown(candidate, index)
            .map_or(NEUTRAL_SCORE, |breakdown| breakdown.score)
    }
}

// `f64::min`/`max` discard NaN; these keep it so bad inputs stay visible.
fn at_most(value: f64, limit: f64) -> f64 {
    if value > limit {
        limit
    } else {
        value
    }
}

fn at_least_zero(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

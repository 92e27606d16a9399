//! Light scoring strategies.
//!
//! A [`LightScorer`] turns a route candidate and the streetlight index into a
//! single score in `[0, 10]`. Two strategies are provided:
//!
//! - [`CompositeScorer`] (default): blends light density, proximity to the
//!   nearest light, dark stretches, lit crossings and road speed.
//! - [`DensityScorer`]: the earlier density-only formula.
//!
//! Both return [`NEUTRAL_SCORE`] when the route has no waypoints or the index
//! holds no lights, because missing data must not read as "unlit".

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::candidate::{RouteCandidate, ScoredCandidate};
use crate::spatial::StreetlightIndex;

mod composite;
mod density;

pub use composite::{CompositeParams, CompositeScorer, ScoreBreakdown};
pub use density::DensityScorer;

/// Score reported when there is nothing to measure.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Highest score any strategy reports.
pub const MAX_SCORE: f64 = 10.0;

/// Distance within which a streetlight counts as lighting a point.
pub const NEAR_LIGHT_RADIUS_METERS: f64 = 30.0;

/// A swappable light score formula.
///
/// Implementations must be pure: the same candidate and index always yield the
/// same score, and scoring never mutates either.
pub trait LightScorer: Send + Sync {
    /// Short identifier used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Score `candidate` against `index`.
    fn score(&self, candidate: &RouteCandidate, index: &StreetlightIndex) -> f64;
}

/// Built-in scoring strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Multi-term formula with default parameters.
    #[default]
    Composite,
    /// Average nearby lights per waypoint.
    Density,
}

impl ScoringStrategy {
    /// Instantiate the scorer for this strategy.
    pub fn scorer(self) -> Box<dyn LightScorer> {
        match self {
            ScoringStrategy::Composite => Box::new(CompositeScorer::default()),
            ScoringStrategy::Density => Box::new(DensityScorer),
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ScoringStrategy::Composite => "composite",
            ScoringStrategy::Density => "density",
        };
        f.write_str(value)
    }
}

/// Score every candidate, preserving input order.
pub fn score_candidates<S>(
    candidates: Vec<RouteCandidate>,
    index: &StreetlightIndex,
    scorer: &S,
) -> Vec<ScoredCandidate>
where
    S: LightScorer + ?Sized,
{
    candidates
        .into_iter()
        .enumerate()
        .map(|(position, candidate)| {
            let light_score = scorer.score(&candidate, index);
            debug!(
                route = position,
                scorer = scorer.name(),
                waypoints = candidate.path.len(),
                light_score,
                "scored route candidate"
            );
            ScoredCandidate::new(candidate, light_score)
        })
        .collect()
}

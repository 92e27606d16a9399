use std::fmt;

use serde::Serialize;

use crate::candidate::{RouteCandidate, ScoredCandidate};
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::scoring::{score_candidates, LightScorer};
use crate::spatial::StreetlightIndex;

/// The three labeled route choices surfaced to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VariantKind {
    #[serde(rename = "fastest")]
    Fastest,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "most-lit")]
    MostLit,
}

impl VariantKind {
    /// Display label shown next to the route.
    pub fn label(self) -> &'static str {
        match self {
            VariantKind::Fastest => "Fastest route",
            VariantKind::Balanced => "Balanced route",
            VariantKind::MostLit => "Most Well Lit route",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            VariantKind::Fastest => "fastest",
            VariantKind::Balanced => "balanced",
            VariantKind::MostLit => "most-lit",
        };
        f.write_str(value)
    }
}

/// A selected route, labeled and ready for serialization.
///
/// Carries the candidate's public fields only; the provider's raw payload is
/// left behind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteVariant {
    pub id: VariantKind,
    pub label: &'static str,
    pub path: Vec<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub duration_minutes: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersections: Option<Vec<GeoPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    pub light_score: f64,
}

impl RouteVariant {
    fn from_scored(id: VariantKind, scored: &ScoredCandidate) -> Self {
        let RouteCandidate {
            path,
            distance_km,
            duration_minutes,
            distance_text,
            duration_text,
            intersections,
            max_speed,
            raw: _,
        } = scored.candidate.clone();

        Self {
            id,
            label: id.label(),
            path,
            distance_km,
            duration_minutes,
            distance_text,
            duration_text,
            intersections,
            max_speed,
            light_score: scored.light_score,
        }
    }
}

/// Pick the fastest, balanced and most-lit variants from scored candidates.
///
/// - fastest: lowest `duration_minutes`, first in input order on ties.
/// - most-lit: highest `light_score`, first in input order on ties.
/// - balanced: the first candidate whose position differs from both of the
///   above, falling back to the fastest when no such candidate exists.
///
/// Returns [`Error::NoCandidates`] for an empty list.
pub fn select_variants(candidates: &[ScoredCandidate]) -> Result<[RouteVariant; 3]> {
    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }

    let mut fastest = 0;
    let mut most_lit = 0;
    for (position, scored) in candidates.iter().enumerate().skip(1) {
        if scored.candidate.duration_minutes < candidates[fastest].candidate.duration_minutes {
            fastest = position;
        }
        if scored.light_score > candidates[most_lit].light_score {
            most_lit = position;
        }
    }

    let balanced = (0..candidates.len())
        .find(|&position| position != fastest && position != most_lit)
        .unwrap_or(fastest);

    Ok([
        RouteVariant::from_scored(VariantKind::Fastest, &candidates[fastest]),
        RouteVariant::from_scored(VariantKind::Balanced, &candidates[balanced]),
        RouteVariant::from_scored(VariantKind::MostLit, &candidates[most_lit]),
    ])
}

/// Score `candidates` against `index` and select the three variants.
pub fn plan_variants<S>(
    candidates: Vec<RouteCandidate>,
    index: &StreetlightIndex,
    scorer: &S,
) -> Result<[RouteVariant; 3]>
where
    S: LightScorer + ?Sized,
{
    let scored = score_candidates(candidates, index, scorer);
    select_variants(&scored)
}

//! Light My Way library entry points.
//!
//! This crate loads a streetlight dataset into an immutable spatial index,
//! scores candidate walking routes against it, and selects the three labeled
//! route variants (fastest, balanced, most-lit) that callers surface to users.
//! Higher-level consumers (CLI, HTTP layers) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod candidate;
pub mod dataset;
pub mod directions;
pub mod error;
pub mod geo;
pub mod output;
pub mod scoring;
pub mod spatial;
pub mod store;
pub mod variants;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use candidate::{RouteCandidate, ScoredCandidate};
pub use dataset::{load_streetlights, resolve_streetlights_path, STREETLIGHTS_ENV_VAR};
pub use directions::DirectionsResponse;
pub use error::{Error, Result};
pub use geo::{distance_meters, GeoPoint};
pub use output::{render_variants, VariantRenderMode};
pub use scoring::{
    score_candidates, CompositeParams, CompositeScorer, DensityScorer, LightScorer,
    ScoreBreakdown, ScoringStrategy, NEUTRAL_SCORE,
};
pub use spatial::StreetlightIndex;
pub use store::StreetlightStore;
pub use variants::{plan_variants, select_variants, RouteVariant, VariantKind};

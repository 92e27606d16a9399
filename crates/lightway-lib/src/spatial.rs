//! KD-tree backed streetlight index for radius and nearest-light queries.
//!
//! # Overview
//!
//! `StreetlightIndex` holds the immutable set of streetlight locations loaded
//! at startup. Points are stored twice: as latitude/longitude for exact
//! haversine distances, and as Earth-centred Cartesian coordinates inside a
//! KD-tree (k=3) for fast candidate lookup.
//!
//! # Exactness
//!
//! The tree measures straight-line chord length, which is never longer than
//! the great-circle distance and orders points the same way. Radius queries
//! therefore over-fetch by chord length and keep only the points whose
//! haversine distance is within the radius, so the answers are identical to a
//! linear scan, including the inclusive boundary.
//!
//! # Coincident lights
//!
//! Several lights often share one position (lamps on a single pole, repeated
//! records). The tree holds one site per distinct position together with the
//! number of lights at it, so any amount of stacking builds and queries the
//! same as spread-out data.
//!
//! # Example
//!
//! ```
//! use lightway_lib::{GeoPoint, StreetlightIndex};
//!
//! let index = StreetlightIndex::from_points(vec![GeoPoint::new(45.4215, -75.6972)]);
//! let here = GeoPoint::new(45.4215, -75.6972);
//! assert_eq!(index.count_within_radius(here, 30.0), 1);
//! assert_eq!(index.nearest_distance(here), 0.0);
//! ```

use std::collections::HashMap;

use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;
use serde_json::Value;
use tracing::info;

use crate::geo::{distance_meters, GeoPoint};

/// KD-tree bucket size (kiddo default).
const BUCKET_SIZE: usize = 32;

/// Extra chord length added to radius lookups so floating point rounding in
/// the Cartesian projection can never drop a point the haversine test keeps.
const CHORD_SLACK_METERS: f64 = 1.0;

/// Immutable collection of streetlight locations.
///
/// Built once and then only queried; every query takes `&self`, so a single
/// index can be shared between any number of readers without locking.
pub struct StreetlightIndex {
    /// KD-tree over Cartesian coordinates. Items are indices into `sites`.
    tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32>,
    /// Distinct light positions.
    sites: Vec<Site>,
    /// Indexed streetlight positions, in source order.
    lights: Vec<GeoPoint>,
    /// Number of source records rejected while building.
    skipped: usize,
}

/// A distinct position and the number of lights standing on it.
#[derive(Debug, Clone, Copy)]
struct Site {
    point: GeoPoint,
    count: usize,
}

impl StreetlightIndex {
    /// An index with no streetlights. Scorers treat this as "no data".
    pub fn empty() -> Self {
        Self::from_points(Vec::new())
    }

    /// Build an index from already-parsed points.
    ///
    /// Points with non-finite coordinates are dropped and counted as skipped.
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        let total = points.len();
        let lights: Vec<GeoPoint> = points.into_iter().filter(GeoPoint::is_finite).collect();
        let skipped = total - lights.len();
        Self::build(lights, skipped)
    }

    /// Build an index from raw point features.
    ///
    /// Each feature's `geometry.coordinates` is read as `[longitude, latitude]`.
    /// Features without a coordinate array of at least two finite numbers are
    /// skipped silently.
    pub fn from_features<'a, I>(features: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut lights = Vec::new();
        let mut skipped = 0;

        for feature in features {
            match point_from_feature(feature) {
                Some(point) => lights.push(point),
                None => skipped += 1,
            }
        }

        Self::build(lights, skipped)
    }

    fn build(lights: Vec<GeoPoint>, skipped: usize) -> Self {
        let mut tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32> = KdTree::new();
        let mut sites: Vec<Site> = Vec::new();
        let mut positions: HashMap<[u64; 3], usize> = HashMap::new();

        for light in &lights {
            let cartesian = light.to_cartesian();
            // +0.0 folds -0.0 into 0.0 so both land on one site.
            let key = cartesian.map(|axis| (axis + 0.0).to_bits());
            match positions.get(&key) {
                Some(&site) => sites[site].count += 1,
                None => {
                    let site = sites.len();
                    positions.insert(key, site);
                    sites.push(Site {
                        point: *light,
                        count: 1,
                    });
                    tree.add(&cartesian, site);
                }
            }
        }

        info!(
            lights = lights.len(),
            sites = sites.len(),
            skipped,
            "built streetlight index"
        );

        Self {
            tree,
            sites,
            lights,
            skipped,
        }
    }

    /// Number of indexed streetlights.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Returns true if the index holds no streetlights.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Number of source records dropped while building the index.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// All indexed streetlight positions, in source order.
    pub fn lights(&self) -> &[GeoPoint] {
        &self.lights
    }

    /// Count streetlights whose distance to `point` is at most `radius_meters`.
    pub fn count_within_radius(&self, point: GeoPoint, radius_meters: f64) -> usize {
        self.candidates_within(point, radius_meters)
            .filter(|(_, distance)| *distance <= radius_meters)
            .map(|(site, _)| site.count)
            .sum()
    }

    /// Streetlights within `radius_meters` of `point` as `(position, distance)`
    /// pairs sorted by distance.
    pub fn within_radius(&self, point: GeoPoint, radius_meters: f64) -> Vec<(GeoPoint, f64)> {
        let mut found: Vec<(GeoPoint, f64)> = self
            .candidates_within(point, radius_meters)
            .filter(|(_, distance)| *distance <= radius_meters)
            .flat_map(|(site, distance)| {
                std::iter::repeat((site.point, distance)).take(site.count)
            })
            .collect();
        found.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        found
    }

    /// Distance in meters from `point` to the closest streetlight.
    ///
    /// Returns positive infinity when the index is empty.
    pub fn nearest_distance(&self, point: GeoPoint) -> f64 {
        if self.lights.is_empty() {
            return f64::INFINITY;
        }
        if !point.is_finite() {
            return f64::NAN;
        }

        let nearest = self
            .tree
            .nearest_one::<SquaredEuclidean>(&point.to_cartesian());
        distance_meters(point, self.sites[nearest.item].point)
    }

    /// Exact haversine distances for every site the tree could consider to be
    /// within `radius_meters`. The caller applies the final inclusive filter.
    fn candidates_within(
        &self,
        point: GeoPoint,
        radius_meters: f64,
    ) -> Box<dyn Iterator<Item = (Site, f64)> + '_> {
        if self.lights.is_empty()
            || !point.is_finite()
            || radius_meters.is_nan()
            || radius_meters < 0.0
        {
            return Box::new(std::iter::empty());
        }
        if radius_meters.is_infinite() {
            return Box::new(
                self.sites
                    .iter()
                    .map(move |site| (*site, distance_meters(point, site.point))),
            );
        }

        let reach = radius_meters + CHORD_SLACK_METERS;
        let neighbours = self
            .tree
            .within_unsorted::<SquaredEuclidean>(&point.to_cartesian(), reach * reach);

        Box::new(neighbours.into_iter().map(move |neighbour| {
            let site = self.sites[neighbour.item];
            (site, distance_meters(point, site.point))
        }))
    }
}

impl Default for StreetlightIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for StreetlightIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreetlightIndex")
            .field("lights", &self.lights.len())
            .field("sites", &self.sites.len())
            .field("skipped", &self.skipped)
            .finish()
    }
}

/// Extract a `[longitude, latitude]` point from a GeoJSON point feature.
fn point_from_feature(feature: &Value) -> Option<GeoPoint> {
    let coordinates = feature
        .get("geometry")?
        .get("coordinates")?
        .as_array()?;
    if coordinates.len() < 2 {
        return None;
    }

    let lng = coordinates[0].as_f64()?;
    let lat = coordinates[1].as_f64()?;
    let point = GeoPoint::from_lng_lat(lng, lat);
    point.is_finite().then_some(point)
}

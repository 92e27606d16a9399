//! End-to-end tests: provider directions -> scores -> variants.

mod common;

use lightway_lib::{
    plan_variants, score_candidates, select_variants, CompositeScorer, DensityScorer,
    LightScorer, ScoringStrategy, StreetlightIndex, VariantKind,
};

use common::{fixture_candidates, fixture_index};

#[test]
fn fixture_routes_map_from_directions() {
    let candidates = fixture_candidates();
    assert_eq!(candidates.len(), 3);

    let durations: Vec<f64> = candidates.iter().map(|c| c.duration_minutes).collect();
    assert_eq!(durations, [10.0, 15.0, 20.0]);
    assert_eq!(candidates[0].path.len(), 3);
    assert_eq!(candidates[1].path.len(), 4);
    assert_eq!(candidates[2].max_speed, Some(60.0));
    assert!(candidates.iter().all(|c| c.raw.is_some()));
}

#[test]
fn composite_scores_favour_the_lit_route() {
    let index = fixture_index();
    let scorer = CompositeScorer::default();
    let candidates = fixture_candidates();

    let breakdowns: Vec<_> = candidates
        .iter()
        .map(|c| scorer.breakdown(c, &index).expect("scored"))
        .collect();

    // Route 0: one lit waypoint (the shared origin), two dark ones.
    assert_eq!(breakdowns[0].lights_near, 1);
    assert_eq!(breakdowns[0].dark_points, 2);
    assert!((breakdowns[0].score - 0.0444).abs() < 1e-3);

    // Route 1: three lit waypoints, both intersections lit.
    assert_eq!(breakdowns[1].lights_near, 3);
    assert!((breakdowns[1].lights_per_km - 2.5).abs() < 1e-9);
    assert!((breakdowns[1].density - 10.0).abs() < 1e-9);
    assert_eq!(breakdowns[1].intersection_bonus, 4.0);
    assert_eq!(breakdowns[1].dark_penalty, 2.0);
    assert!((breakdowns[1].score - 1.903).abs() < 1e-2);

    // Route 2: mostly dark and on a fast road.
    assert_eq!(breakdowns[2].speed_penalty, 5.0);
    assert_eq!(breakdowns[2].score, 0.0);
}

#[test]
fn variants_pick_fastest_balanced_and_most_lit() {
    let index = fixture_index();
    let [fastest, balanced, most_lit] =
        plan_variants(fixture_candidates(), &index, &CompositeScorer::default())
            .expect("plans");

    assert_eq!(fastest.id, VariantKind::Fastest);
    assert_eq!(fastest.distance_text.as_deref(), Some("0.9 km"));
    assert_eq!(most_lit.id, VariantKind::MostLit);
    assert_eq!(most_lit.distance_text.as_deref(), Some("1.2 km"));
    assert_eq!(balanced.id, VariantKind::Balanced);
    assert_eq!(balanced.distance_text.as_deref(), Some("1.6 km"));
}

#[test]
fn density_strategy_agrees_on_most_lit() {
    let index = fixture_index();
    let scored = score_candidates(fixture_candidates(), &index, &DensityScorer);
    assert!((scored[0].light_score - 2.2667).abs() < 1e-3);
    assert!((scored[1].light_score - 2.6).abs() < 1e-9);
    assert!((scored[2].light_score - 2.2).abs() < 1e-9);

    let [_, _, most_lit] = select_variants(&scored).expect("selects");
    assert_eq!(most_lit.distance_text.as_deref(), Some("1.2 km"));
}

#[test]
fn empty_index_makes_fastest_also_most_lit() {
    let index = StreetlightIndex::empty();
    let scorer = ScoringStrategy::Composite.scorer();
    let [fastest, balanced, most_lit] =
        plan_variants(fixture_candidates(), &index, scorer.as_ref()).expect("plans");

    assert_eq!(most_lit.light_score, 5.0);
    assert_eq!(most_lit.distance_text, fastest.distance_text);
    assert_eq!(balanced.distance_text.as_deref(), Some("1.2 km"));
}

#[test]
fn scores_are_bounded_for_fixture_routes() {
    let index = fixture_index();
    for strategy in [ScoringStrategy::Composite, ScoringStrategy::Density] {
        let scorer = strategy.scorer();
        for candidate in fixture_candidates() {
            let score = scorer.score(&candidate, &index);
            assert!((0.0..=10.0).contains(&score), "{strategy}: {score}");
        }
    }
}

#[test]
fn empty_candidate_list_is_an_error() {
    let index = fixture_index();
    let err = plan_variants(Vec::new(), &index, &CompositeScorer::default()).unwrap_err();
    assert!(matches!(err, lightway_lib::Error::NoCandidates));
}

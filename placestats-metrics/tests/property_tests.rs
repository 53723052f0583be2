//! Property-based tests for the metrics engine.
//!
//! # Invariants tested
//!
//! - **Heatmap maximum:** `heatmap_max` equals the largest cell, or 1 when
//!   the heatmap is empty.
//! - **Ranking shape:** at most ten places, finite non-increasing scores,
//!   even when ratings are not finite.
//! - **Idempotence:** identical input yields an identical report.
//! - **Bounded statistics:** correlation lies in `[-1, 1]`; entropy is
//!   non-negative and at most `log2` of the number of cities.

use std::collections::BTreeMap;

use placestats_core::{AgeSlice, FavoriteInteractionRecord};
use placestats_metrics::MetricsEngine;
use proptest::prelude::*;

const CITIES: [&str; 4] = ["Tunis", "Sousse", "Sfax", "Bizerte"];
const CATEGORIES: [&str; 4] = ["Café", "Resto", "Musée", "Lieu public"];

fn record_strategy() -> impl Strategy<Value = FavoriteInteractionRecord> {
    (
        0_i64..40,
        0_i64..25,
        -5_i32..80,
        proptest::option::of(0.0_f64..150.0),
        proptest::option::of(0.0_f64..150.0),
        proptest::sample::select(CITIES.to_vec()),
        proptest::sample::select(CATEGORIES.to_vec()),
    )
        .prop_map(
            |(user_id, lieu_id, age, budget_min, budget_max, ville, categorie)| {
                FavoriteInteractionRecord {
                    user_id,
                    lieu_id,
                    lieu_nom: format!("Lieu {lieu_id}"),
                    categorie: categorie.to_owned(),
                    ville: ville.to_owned(),
                    budget_min,
                    budget_max,
                    age,
                    role: if user_id % 2 == 0 { "abonne" } else { "visiteur" }.to_owned(),
                    date_ajout: String::new(),
                }
            },
        )
}

fn rating_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.0_f64..=5.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn aggregates_strategy()
-> impl Strategy<Value = (BTreeMap<i64, f64>, BTreeMap<i64, u64>, BTreeMap<i64, u64>)> {
    (
        proptest::collection::btree_map(0_i64..25, rating_strategy(), 0..8),
        proptest::collection::btree_map(0_i64..25, 0_u64..20, 0..8),
        proptest::collection::btree_map(0_i64..25, 0_u64..20, 0..8),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: `heatmap_max` is the true maximum over every cell.
    #[test]
    fn heatmap_max_is_the_true_maximum(
        records in proptest::collection::vec(record_strategy(), 0..60),
    ) {
        let report = MetricsEngine::default().compute(
            &records,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &BTreeMap::new(),
        );
        let expected = report
            .heatmap
            .values()
            .flat_map(BTreeMap::values)
            .copied()
            .max()
            .unwrap_or(1);
        prop_assert_eq!(report.heatmap_max, expected);
        prop_assert!(!report.heatmap.contains_key(&AgeSlice::Unknown));
    }

    /// Property: the ranking keeps at most ten places sorted by score.
    #[test]
    fn ranking_is_bounded_and_sorted(
        records in proptest::collection::vec(record_strategy(), 0..120),
        (avg, current, previous) in aggregates_strategy(),
    ) {
        let report = MetricsEngine::default().compute(&records, &avg, &current, &previous);
        prop_assert!(report.top_lieux.len() <= 10);
        prop_assert!(report.top_lieux.iter().all(|score| score.score_global.is_finite()));
        for pair in report.top_lieux.windows(2) {
            if let [a, b] = pair {
                prop_assert!(a.score_global >= b.score_global);
            }
        }
    }

    /// Property: computing twice yields the same report.
    #[test]
    fn computation_is_idempotent(
        records in proptest::collection::vec(record_strategy(), 0..60),
        (avg, current, previous) in aggregates_strategy(),
    ) {
        let engine = MetricsEngine::default();
        let first = engine.compute(&records, &avg, &current, &previous);
        let second = engine.compute(&records, &avg, &current, &previous);
        prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }

    /// Property: correlation and entropy stay within their mathematical bounds.
    #[test]
    fn statistics_stay_in_range(
        records in proptest::collection::vec(record_strategy(), 1..80),
    ) {
        let report = MetricsEngine::default().compute(
            &records,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &BTreeMap::new(),
        );
        let r = report.pearson_age_budget;
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r), "pearson out of range: {}", r);
        let max_entropy = 2.0_f64;
        for entropy in report.entropie_par_age.values() {
            prop_assert!(*entropy >= 0.0 && *entropy <= max_entropy + 1e-9);
        }
    }
}

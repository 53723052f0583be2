//! Computation of the analytics report from normalized records.
//!
//! Every statistic is an independent reduction over the record slice. The
//! intermediate accumulators are ordered maps local to the call, which makes
//! the output a pure function of the input.
#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use placestats_core::{
    AgeSlice, AnalyticsReport, BudgetSlice, FavoriteInteractionRecord, LieuScore,
    NO_DOMINANT_CATEGORY, PlaceAggregates,
};

use crate::{EngineConfig, EngineConfigError, ScoreWeights, pearson, shannon_entropy};

type Heatmap = BTreeMap<AgeSlice, BTreeMap<String, u64>>;

/// Computes [`AnalyticsReport`] values.
///
/// The engine holds only its configuration; it keeps no state between calls.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use placestats_core::FavoriteInteractionRecord;
/// use placestats_metrics::MetricsEngine;
///
/// let records = vec![FavoriteInteractionRecord {
///     user_id: 1,
///     lieu_id: 9,
///     categorie: "Café".into(),
///     ville: "Tunis".into(),
///     age: 22,
///     ..FavoriteInteractionRecord::default()
/// }];
/// let report = MetricsEngine::default().compute(
///     &records,
///     &BTreeMap::new(),
///     &BTreeMap::new(),
///     &BTreeMap::new(),
/// );
///
/// assert_eq!(report.total_favoris, 1);
/// assert_eq!(report.top_lieux[0].lieu_id, 9);
/// assert!(report.top_lieux[0].tendance.is_nan());
/// ```
///
/// Engines are built through [`MetricsEngine::try_new`] or `Default`, so an
/// unvalidated configuration cannot reach the scorer:
///
/// ```compile_fail
/// use placestats_metrics::{EngineConfig, MetricsEngine};
///
/// let _ = MetricsEngine::new(EngineConfig::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsEngine {
    config: EngineConfig,
}

impl MetricsEngine {
    /// Build an engine without validating `config`.
    #[must_use]
    pub(crate) const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Build an engine from a validated configuration.
    ///
    /// # Errors
    /// Returns [`EngineConfigError`] when `config` fails
    /// [`EngineConfig::validate`].
    pub fn try_new(config: EngineConfig) -> Result<Self, EngineConfigError> {
        config.validate().map(Self::new)
    }

    /// Return the engine configuration.
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Compute every statistic over `records`.
    ///
    /// The three maps are keyed by place id; missing places count as `0`.
    /// An empty `records` slice yields [`AnalyticsReport::empty`].
    #[must_use]
    pub fn compute(
        &self,
        records: &[FavoriteInteractionRecord],
        avg_note_by_lieu: &BTreeMap<i64, f64>,
        current_week_by_lieu: &BTreeMap<i64, u64>,
        prev_week_by_lieu: &BTreeMap<i64, u64>,
    ) -> AnalyticsReport {
        if records.is_empty() {
            debug!("no favourites in snapshot, returning the empty report");
            return AnalyticsReport::empty();
        }

        let heatmap = heatmap(records);
        let heatmap_max = heatmap
            .values()
            .flat_map(BTreeMap::values)
            .copied()
            .max()
            .unwrap_or(1);
        let age_slices = heatmap.keys().copied().collect();
        let dominante_par_age = dominant_categories(&heatmap);
        let top_lieux = self.rank_places(
            records,
            avg_note_by_lieu,
            current_week_by_lieu,
            prev_week_by_lieu,
        );

        let total_favoris = count(records.len());
        let total_users_actifs = count(
            records
                .iter()
                .map(|record| record.user_id)
                .collect::<BTreeSet<_>>()
                .len(),
        );
        let total_lieux = count(
            records
                .iter()
                .map(|record| record.lieu_id)
                .collect::<BTreeSet<_>>()
                .len(),
        );

        debug!(
            "computed report over {total_favoris} favourites, {total_users_actifs} users and {total_lieux} places"
        );

        AnalyticsReport {
            heatmap,
            age_slices,
            categories: categories(records),
            heatmap_max,
            top_lieux,
            budget_age: budget_by_age(records),
            total_favoris,
            total_users_actifs,
            total_lieux,
            moyenne_favoris_par_user: ratio(total_favoris, total_users_actifs),
            dominante_par_age,
            pearson_age_budget: age_budget_correlation(records),
            entropie_par_age: city_entropy_by_age(records),
            favoris_by_role: favourites_by_role(records),
        }
    }

    /// Compute a report using aggregates bundled in a [`PlaceAggregates`].
    #[must_use]
    pub fn compute_with(
        &self,
        records: &[FavoriteInteractionRecord],
        aggregates: &PlaceAggregates,
    ) -> AnalyticsReport {
        self.compute(
            records,
            &aggregates.avg_note_by_lieu,
            &aggregates.current_week_by_lieu,
            &aggregates.previous_week_by_lieu,
        )
    }

    fn rank_places(
        &self,
        records: &[FavoriteInteractionRecord],
        avg_note_by_lieu: &BTreeMap<i64, f64>,
        current_week_by_lieu: &BTreeMap<i64, u64>,
        prev_week_by_lieu: &BTreeMap<i64, u64>,
    ) -> Vec<LieuScore> {
        // Keyed by id so equal scores keep ascending lieu_id order through
        // the stable sort below.
        let mut places: BTreeMap<i64, PlaceTally<'_>> = BTreeMap::new();
        for record in records {
            places
                .entry(record.lieu_id)
                .and_modify(|tally| tally.favourites += 1)
                .or_insert(PlaceTally {
                    first: record,
                    favourites: 1,
                });
        }
        let max_favourites = places
            .values()
            .map(|tally| tally.favourites)
            .max()
            .unwrap_or(1)
            .max(1);

        let mut scores: Vec<LieuScore> = places
            .into_iter()
            .map(|(lieu_id, tally)| {
                // A non-finite rating counts as no rating.
                let avg_note = avg_note_by_lieu
                    .get(&lieu_id)
                    .copied()
                    .filter(|note| note.is_finite())
                    .unwrap_or(0.0);
                let current = current_week_by_lieu.get(&lieu_id).copied().unwrap_or(0);
                let previous = prev_week_by_lieu.get(&lieu_id).copied().unwrap_or(0);
                LieuScore {
                    lieu_id,
                    nom: tally.first.lieu_nom.clone(),
                    categorie: tally.first.categorie.clone(),
                    ville: tally.first.ville.clone(),
                    nb_favoris: tally.favourites,
                    avg_note,
                    score_global: score_place(
                        self.config.weights,
                        tally.favourites,
                        max_favourites,
                        avg_note,
                        current,
                    ),
                    tendance: trend(current, previous),
                }
            })
            .collect();

        scores.sort_by(|a, b| b.score_global.total_cmp(&a.score_global));
        scores.truncate(self.config.top_n);
        scores
    }
}

struct PlaceTally<'a> {
    first: &'a FavoriteInteractionRecord,
    favourites: u64,
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the popularity score is a weighted sum of ratios"
)]
fn score_place(
    weights: ScoreWeights,
    favourites: u64,
    max_favourites: u64,
    avg_note: f64,
    current_week: u64,
) -> f64 {
    let max = max_favourites.max(1) as f64;
    weights.favourites * (favourites as f64 / max)
        + weights.rating * (avg_note / weights.rating_scale)
        + weights.recency * (current_week as f64 / max)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "trend is the ratio of two weekly counts"
)]
fn trend(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        f64::NAN
    } else {
        current as f64 / previous as f64
    }
}

fn heatmap(records: &[FavoriteInteractionRecord]) -> Heatmap {
    let mut cells = Heatmap::new();
    for record in records.iter().filter(|record| record.age_slice().is_known()) {
        *cells
            .entry(record.age_slice())
            .or_default()
            .entry(record.categorie.clone())
            .or_default() += 1;
    }
    cells
}

fn categories(records: &[FavoriteInteractionRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.categorie.as_str())
        .filter(|categorie| !categorie.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn budget_by_age(
    records: &[FavoriteInteractionRecord],
) -> BTreeMap<AgeSlice, BTreeMap<BudgetSlice, u64>> {
    let mut cells: BTreeMap<AgeSlice, BTreeMap<BudgetSlice, u64>> = BTreeMap::new();
    for record in records.iter().filter(|record| record.age_slice().is_known()) {
        *cells
            .entry(record.age_slice())
            .or_default()
            .entry(record.budget_slice())
            .or_default() += 1;
    }
    cells
}

/// Ties go to the lexicographically smallest category.
fn dominant_categories(heatmap: &Heatmap) -> BTreeMap<AgeSlice, String> {
    AgeSlice::KNOWN
        .iter()
        .map(|&slice| {
            let dominant = heatmap
                .get(&slice)
                .and_then(|row| {
                    row.iter().fold(None, |best: Option<(&String, u64)>, (categorie, &n)| {
                        match best {
                            Some((_, top)) if top >= n => best,
                            _ => Some((categorie, n)),
                        }
                    })
                })
                .map_or_else(|| NO_DOMINANT_CATEGORY.to_owned(), |(c, _)| c.clone());
            (slice, dominant)
        })
        .collect()
}

fn age_budget_correlation(records: &[FavoriteInteractionRecord]) -> f64 {
    let points: Vec<(f64, f64)> = records
        .iter()
        .filter(|record| record.age > 0)
        .map(|record| (f64::from(record.age), record.budget_moyen()))
        .filter(|&(_, budget)| budget > 0.0)
        .collect();
    pearson(&points)
}

fn city_entropy_by_age(records: &[FavoriteInteractionRecord]) -> BTreeMap<AgeSlice, f64> {
    let mut cities: BTreeMap<AgeSlice, BTreeMap<&str, u64>> = BTreeMap::new();
    for record in records.iter().filter(|record| record.age_slice().is_known()) {
        *cities
            .entry(record.age_slice())
            .or_default()
            .entry(record.ville.as_str())
            .or_default() += 1;
    }
    AgeSlice::KNOWN
        .iter()
        .map(|slice| {
            let entropy = cities
                .get(slice)
                .map_or(0.0, |row| shannon_entropy(row.values().copied()));
            (*slice, entropy)
        })
        .collect()
}

fn favourites_by_role(records: &[FavoriteInteractionRecord]) -> BTreeMap<String, u64> {
    let mut roles: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        *roles.entry(record.role.clone()).or_default() += 1;
    }
    roles
}

fn count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the per-user average divides two counts"
)]
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

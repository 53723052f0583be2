//! The analytics report handed to presentation code.
//!
//! A report is built once per computation and never mutated afterwards. All
//! keyed collections are ordered maps so two reports built from the same
//! input compare and serialize identically.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{AgeSlice, BudgetSlice};

/// Category reported for an age slice without any favourite.
pub const NO_DOMINANT_CATEGORY: &str = "—";

/// One ranked place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LieuScore {
    /// Identifier of the place.
    pub lieu_id: i64,
    /// Display name.
    pub nom: String,
    /// Normalized category.
    pub categorie: String,
    /// City.
    pub ville: String,
    /// Number of favourites in the snapshot.
    pub nb_favoris: u64,
    /// Average rating on a 0 to 5 scale; `0.0` when unrated.
    pub avg_note: f64,
    /// Weighted popularity score.
    pub score_global: f64,
    /// Current-week favourites over previous-week favourites.
    ///
    /// `NaN` when the previous week has no favourite; serializes as `null`.
    pub tendance: f64,
}

impl LieuScore {
    /// Report whether a week-over-week trend could be computed.
    #[must_use]
    pub const fn has_trend(&self) -> bool {
        !self.tendance.is_nan()
    }
}

/// Statistical summaries computed from one snapshot of favourites.
///
/// # Examples
/// ```
/// use placestats_core::{AgeSlice, AnalyticsReport};
///
/// let report = AnalyticsReport::empty();
/// assert!(report.is_empty());
/// assert_eq!(report.heatmap_max, 1);
/// assert_eq!(report.heatmap_intensity(AgeSlice::From18To24, "Café"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    /// Favourite counts keyed by age slice then category.
    pub heatmap: BTreeMap<AgeSlice, BTreeMap<String, u64>>,
    /// Age axis of the heatmap in display order.
    pub age_slices: Vec<AgeSlice>,
    /// Category axis of the heatmap, sorted.
    pub categories: Vec<String>,
    /// Largest heatmap cell; `1` when the heatmap is empty.
    pub heatmap_max: u64,
    /// Best places by weighted score, descending.
    pub top_lieux: Vec<LieuScore>,
    /// Favourite counts keyed by age slice then budget slice.
    pub budget_age: BTreeMap<AgeSlice, BTreeMap<BudgetSlice, u64>>,
    /// Number of favourites.
    pub total_favoris: u64,
    /// Number of distinct users with at least one favourite.
    pub total_users_actifs: u64,
    /// Number of distinct favourited places.
    pub total_lieux: u64,
    /// Favourites per active user.
    pub moyenne_favoris_par_user: f64,
    /// Most favourited category per age slice.
    pub dominante_par_age: BTreeMap<AgeSlice, String>,
    /// Pearson correlation between age and averaged budget.
    pub pearson_age_budget: f64,
    /// Base-2 Shannon entropy of cities per age slice.
    pub entropie_par_age: BTreeMap<AgeSlice, f64>,
    /// Favourite counts keyed by user role.
    pub favoris_by_role: BTreeMap<String, u64>,
}

impl AnalyticsReport {
    /// The report for a snapshot without any favourite.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            heatmap: BTreeMap::new(),
            age_slices: Vec::new(),
            categories: Vec::new(),
            heatmap_max: 1,
            top_lieux: Vec::new(),
            budget_age: BTreeMap::new(),
            total_favoris: 0,
            total_users_actifs: 0,
            total_lieux: 0,
            moyenne_favoris_par_user: 0.0,
            dominante_par_age: BTreeMap::new(),
            pearson_age_budget: 0.0,
            entropie_par_age: BTreeMap::new(),
            favoris_by_role: BTreeMap::new(),
        }
    }

    /// Report whether the snapshot held no favourite.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_favoris == 0
    }

    /// Return a heatmap cell, `0` when absent.
    #[must_use]
    pub fn heatmap_count(&self, age: AgeSlice, categorie: &str) -> u64 {
        self.heatmap
            .get(&age)
            .and_then(|row| row.get(categorie))
            .copied()
            .unwrap_or_default()
    }

    /// Return a heatmap cell scaled by [`Self::heatmap_max`] into `0.0..=1.0`.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "intensity is the ratio of two favourite counts"
    )]
    #[must_use]
    pub fn heatmap_intensity(&self, age: AgeSlice, categorie: &str) -> f64 {
        let max = self.heatmap_max.max(1) as f64;
        (self.heatmap_count(age, categorie) as f64 / max).clamp(0.0, 1.0)
    }
}

impl Default for AnalyticsReport {
    fn default() -> Self {
        Self::empty()
    }
}

//! Normalized favourite interaction records.

use serde::Serialize;

use crate::{AgeSlice, BudgetSlice};

/// One "user favorited a place" event, enriched with user and place data.
///
/// Values are produced by [`RecordNormalizer`](crate::RecordNormalizer) and
/// treated as read-only afterwards. Age and budget slices are derived on
/// demand so they always agree with `age` and the budget bounds.
///
/// # Examples
/// ```
/// use placestats_core::{AgeSlice, BudgetSlice, FavoriteInteractionRecord};
///
/// let record = FavoriteInteractionRecord {
///     user_id: 1,
///     lieu_id: 7,
///     age: 30,
///     budget_min: Some(10.0),
///     budget_max: Some(30.0),
///     ..FavoriteInteractionRecord::default()
/// };
///
/// assert_eq!(record.budget_moyen(), 20.0);
/// assert_eq!(record.budget_slice(), BudgetSlice::From20To80);
/// assert_eq!(record.age_slice(), AgeSlice::From25To34);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FavoriteInteractionRecord {
    /// Identifier of the user who added the favourite.
    pub user_id: i64,
    /// Identifier of the favourited place.
    pub lieu_id: i64,
    /// Display name of the place.
    pub lieu_nom: String,
    /// Category in its normalized display form.
    pub categorie: String,
    /// City of the place.
    pub ville: String,
    /// Lower price bound, when known.
    pub budget_min: Option<f64>,
    /// Upper price bound, when known.
    pub budget_max: Option<f64>,
    /// Age in whole years; positive once normalized.
    pub age: i32,
    /// Role of the user account.
    pub role: String,
    /// Timestamp of the favourite, kept verbatim.
    pub date_ajout: String,
}

impl FavoriteInteractionRecord {
    /// Averaged budget of the place; see [`budget_moyen`].
    #[must_use]
    pub fn budget_moyen(&self) -> f64 {
        budget_moyen(self.budget_min, self.budget_max)
    }

    /// Age bucket derived from [`Self::age`].
    #[must_use]
    pub const fn age_slice(&self) -> AgeSlice {
        AgeSlice::from_age(self.age)
    }

    /// Budget bucket derived from [`Self::budget_moyen`].
    #[must_use]
    pub fn budget_slice(&self) -> BudgetSlice {
        BudgetSlice::from_budget(self.budget_moyen())
    }
}

/// Resolve optional budget bounds into one value.
///
/// Both bounds average, a single bound stands alone, and no bound yields
/// `0.0`.
///
/// # Examples
/// ```
/// use placestats_core::budget_moyen;
///
/// assert_eq!(budget_moyen(None, None), 0.0);
/// assert_eq!(budget_moyen(Some(10.0), None), 10.0);
/// assert_eq!(budget_moyen(Some(10.0), Some(20.0)), 15.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "averaging the two bounds is floating-point by nature"
)]
#[must_use]
pub fn budget_moyen(budget_min: Option<f64>, budget_max: Option<f64>) -> f64 {
    match (budget_min, budget_max) {
        (Some(min), Some(max)) => (min + max) / 2.0,
        (Some(value), None) | (None, Some(value)) => value,
        (None, None) => 0.0,
    }
}

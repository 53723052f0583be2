//! Source-driven report computation.
//!
//! Wires a [`FavoriteSource`] through the [`RecordNormalizer`] into the
//! [`MetricsEngine`]. Read failures never escape: a dashboard showing an empty
//! snapshot is preferred over an error page.
#![forbid(unsafe_code)]

use chrono::NaiveDate;
use log::{debug, warn};
use placestats_core::{AnalyticsReport, FavoriteSource, PlaceAggregates, RecordNormalizer};

use crate::MetricsEngine;

/// Load a snapshot from `source` and compute its report.
///
/// `today` is the reference date for age computation. A failure to load rows
/// yields [`AnalyticsReport::empty`]; a failure to load per-place aggregates
/// falls back to empty aggregates. Both are logged at `warn` level.
///
/// # Examples
/// ```
/// use std::convert::Infallible;
/// use chrono::NaiveDate;
/// use placestats_core::{FavoriteSource, PlaceAggregates, RawFavoriteRow};
/// use placestats_metrics::{MetricsEngine, compute_from_source};
///
/// struct Single;
///
/// impl FavoriteSource for Single {
///     type Error = Infallible;
///
///     fn has_age_data(&self) -> bool {
///         false
///     }
///
///     fn load_rows(&self) -> Result<Vec<RawFavoriteRow>, Self::Error> {
///         Ok(vec![RawFavoriteRow {
///             user_id: Some(1),
///             lieu_id: Some(2),
///             ..RawFavoriteRow::default()
///         }])
///     }
///
///     fn load_place_aggregates(&self) -> Result<PlaceAggregates, Self::Error> {
///         Ok(PlaceAggregates::default())
///     }
/// }
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
/// let report = compute_from_source(&MetricsEngine::default(), &Single, today);
/// assert_eq!(report.total_lieux, 1);
/// ```
pub fn compute_from_source<S>(engine: &MetricsEngine, source: &S, today: NaiveDate) -> AnalyticsReport
where
    S: FavoriteSource + ?Sized,
{
    let rows = match source.load_rows() {
        Ok(rows) => rows,
        Err(err) => {
            warn!("failed to load favourites, reporting an empty snapshot: {err}");
            return AnalyticsReport::empty();
        }
    };
    let aggregates = source.load_place_aggregates().unwrap_or_else(|err| {
        warn!("failed to load per-place aggregates, ratings and trends default to zero: {err}");
        PlaceAggregates::default()
    });

    let normalizer = RecordNormalizer::new(today, source.has_age_data());
    let records = normalizer.normalize_all(&rows);
    debug!(
        "normalized {} favourite rows (birth dates available: {})",
        records.len(),
        source.has_age_data()
    );
    engine.compute_with(&records, &aggregates)
}

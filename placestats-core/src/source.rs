//! Data access seam for favourite snapshots.
//!
//! The `FavoriteSource` trait is implemented by whatever collaborator knows
//! how to reach the data store. The engine only consumes what it returns,
//! including the signal telling whether birth dates exist at all.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::RawFavoriteRow;

/// Per-place aggregates computed by the data-access layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceAggregates {
    /// Average rating per place id.
    pub avg_note_by_lieu: BTreeMap<i64, f64>,
    /// Favourites added during the last 7 days per place id.
    pub current_week_by_lieu: BTreeMap<i64, u64>,
    /// Favourites added 7 to 14 days ago per place id.
    pub previous_week_by_lieu: BTreeMap<i64, u64>,
}

/// Read-only access to one point-in-time snapshot of favourites.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use placestats_core::{FavoriteSource, PlaceAggregates, RawFavoriteRow};
///
/// struct Fixed(Vec<RawFavoriteRow>);
///
/// impl FavoriteSource for Fixed {
///     type Error = Infallible;
///
///     fn has_age_data(&self) -> bool {
///         false
///     }
///
///     fn load_rows(&self) -> Result<Vec<RawFavoriteRow>, Self::Error> {
///         Ok(self.0.clone())
///     }
///
///     fn load_place_aggregates(&self) -> Result<PlaceAggregates, Self::Error> {
///         Ok(PlaceAggregates::default())
///     }
/// }
///
/// let source = Fixed(vec![RawFavoriteRow::default()]);
/// assert_eq!(source.load_rows().map(|rows| rows.len()), Ok(1));
/// ```
pub trait FavoriteSource {
    /// Failure raised when the underlying store cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Report whether the store exposes user birth dates.
    fn has_age_data(&self) -> bool;

    /// Load every joined favourite/user/place row.
    fn load_rows(&self) -> Result<Vec<RawFavoriteRow>, Self::Error>;

    /// Load the average ratings and weekly favourite counts per place.
    fn load_place_aggregates(&self) -> Result<PlaceAggregates, Self::Error>;
}

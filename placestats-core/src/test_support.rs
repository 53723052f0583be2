//! Test-only `FavoriteSource` implementations used by unit and behaviour
//! tests.

use thiserror::Error;

use crate::{FavoriteSource, PlaceAggregates, RawFavoriteRow};

/// In-memory `FavoriteSource` serving a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    has_age_data: bool,
    rows: Vec<RawFavoriteRow>,
    aggregates: PlaceAggregates,
}

impl MemorySource {
    /// Create a source from rows, without birth-date data or aggregates.
    pub fn with_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawFavoriteRow>,
    {
        Self {
            rows: rows.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Declare whether birth dates are available.
    #[must_use]
    pub const fn with_age_data(mut self, has_age_data: bool) -> Self {
        self.has_age_data = has_age_data;
        self
    }

    /// Attach per-place aggregates.
    #[must_use]
    pub fn with_aggregates(mut self, aggregates: PlaceAggregates) -> Self {
        self.aggregates = aggregates;
        self
    }
}

impl FavoriteSource for MemorySource {
    type Error = SourceUnavailable;

    fn has_age_data(&self) -> bool {
        self.has_age_data
    }

    fn load_rows(&self) -> Result<Vec<RawFavoriteRow>, Self::Error> {
        Ok(self.rows.clone())
    }

    fn load_place_aggregates(&self) -> Result<PlaceAggregates, Self::Error> {
        Ok(self.aggregates.clone())
    }
}

/// Error returned by [`UnreachableSource`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("favourite store is unreachable")]
pub struct SourceUnavailable;

/// `FavoriteSource` whose reads fail.
///
/// By default every read fails. [`UnreachableSource::rows_only`] serves its
/// rows and fails only the aggregate lookup.
#[derive(Debug, Clone, Default)]
pub struct UnreachableSource {
    rows: Option<Vec<RawFavoriteRow>>,
}

impl UnreachableSource {
    /// Serve `rows` but fail when aggregates are requested.
    pub fn rows_only<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawFavoriteRow>,
    {
        Self {
            rows: Some(rows.into_iter().collect()),
        }
    }
}

impl FavoriteSource for UnreachableSource {
    type Error = SourceUnavailable;

    fn has_age_data(&self) -> bool {
        false
    }

    fn load_rows(&self) -> Result<Vec<RawFavoriteRow>, Self::Error> {
        self.rows.clone().ok_or(SourceUnavailable)
    }

    fn load_place_aggregates(&self) -> Result<PlaceAggregates, Self::Error> {
        Err(SourceUnavailable)
    }
}

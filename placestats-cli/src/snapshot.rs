//! JSON snapshot files exported from the favourite store.
//!
//! A snapshot bundles the favourite rows, the birth-date availability flag
//! and the per-place aggregates the engine needs:
//!
//! ```json
//! {
//!   "has_birth_dates": true,
//!   "rows": [{ "user_id": 1, "lieu_id": 4, "date_naissance": "1999-05-01" }],
//!   "avg_note_by_lieu": { "4": 4.5 },
//!   "current_week_by_lieu": { "4": 2 },
//!   "previous_week_by_lieu": { "4": 1 }
//! }
//! ```
//!
//! Every field is optional.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use placestats_core::{FavoriteSource, PlaceAggregates, RawFavoriteRow};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be opened.
    #[error("failed to open snapshot at {path:?}: {source}")]
    Open {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The snapshot file is not valid snapshot JSON.
    #[error("failed to parse snapshot JSON at {path:?}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Decoded contents of a snapshot file.
///
/// The aggregate maps are listed field by field: JSON object keys are strings
/// and only direct map deserialization turns them into place ids.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Whether the exporting store had a birth-date column.
    pub has_birth_dates: bool,
    /// Favourite rows joined with their user and place.
    pub rows: Vec<RawFavoriteRow>,
    /// Average rating per place id.
    pub avg_note_by_lieu: BTreeMap<i64, f64>,
    /// Favourites added during the last 7 days per place id.
    pub current_week_by_lieu: BTreeMap<i64, u64>,
    /// Favourites added 7 to 14 days ago per place id.
    pub previous_week_by_lieu: BTreeMap<i64, u64>,
}

/// [`FavoriteSource`] backed by a snapshot already loaded into memory.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    /// Wrap an in-memory snapshot.
    #[must_use]
    pub const fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load and decode the snapshot stored at `path`.
    ///
    /// # Errors
    /// Returns [`SnapshotError::Open`] when the file cannot be opened and
    /// [`SnapshotError::Parse`] when its contents are not snapshot JSON.
    pub fn open(path: &Utf8Path) -> Result<Self, SnapshotError> {
        let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            SnapshotError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file)).map_err(
            |source| SnapshotError::Parse {
                path: path.to_path_buf(),
                source,
            },
        )?;
        debug!(
            "loaded snapshot {path} with {} rows (birth dates: {})",
            snapshot.rows.len(),
            snapshot.has_birth_dates
        );
        Ok(Self::new(snapshot))
    }
}

impl FavoriteSource for SnapshotSource {
    type Error = Infallible;

    fn has_age_data(&self) -> bool {
        self.snapshot.has_birth_dates
    }

    fn load_rows(&self) -> Result<Vec<RawFavoriteRow>, Self::Error> {
        Ok(self.snapshot.rows.clone())
    }

    fn load_place_aggregates(&self) -> Result<PlaceAggregates, Self::Error> {
        Ok(PlaceAggregates {
            avg_note_by_lieu: self.snapshot.avg_note_by_lieu.clone(),
            current_week_by_lieu: self.snapshot.current_week_by_lieu.clone(),
            previous_week_by_lieu: self.snapshot.previous_week_by_lieu.clone(),
        })
    }
}

//! Core domain types for the placestats analytics engine.
//!
//! The crate models one "user favorited a place" interaction after
//! normalization, the bucket labels derived from it, and the immutable
//! [`AnalyticsReport`] handed to presentation code. It also defines the
//! [`FavoriteSource`] seam through which a data-access collaborator supplies
//! raw rows and per-place aggregates.
//!
//! Nothing here performs I/O. Raw rows are mapped by [`RecordNormalizer`],
//! which never fails: missing or malformed fields fall back to safe defaults.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod normalizer;
pub mod record;
pub mod report;
pub mod slices;
pub mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use normalizer::{PSEUDO_AGES, RawFavoriteRow, RecordNormalizer, normalize_category, pseudo_age};
pub use record::{FavoriteInteractionRecord, budget_moyen};
pub use report::{AnalyticsReport, LieuScore, NO_DOMINANT_CATEGORY};
pub use slices::{AgeSlice, BudgetSlice};
pub use source::{FavoriteSource, PlaceAggregates};

//! Facade crate for the placestats favourite statistics engine.
//!
//! This crate re-exports the domain types, the data-access seam and the
//! metrics engine. In-memory sources for tests are exposed behind the
//! `test-support` feature.

#![forbid(unsafe_code)]

pub use placestats_core::{
    AgeSlice, AnalyticsReport, BudgetSlice, FavoriteInteractionRecord, FavoriteSource, LieuScore,
    NO_DOMINANT_CATEGORY, PlaceAggregates, RawFavoriteRow, RecordNormalizer,
};

pub use placestats_metrics::{
    DEFAULT_TOP_N, EngineConfig, EngineConfigError, MetricsEngine, ScoreWeights,
    compute_from_source,
};

#[cfg(feature = "test-support")]
pub use placestats_core::test_support;

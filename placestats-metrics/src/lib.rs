//! Statistics engine for placestats.
//!
//! The crate turns normalized favourite records into one
//! [`AnalyticsReport`](placestats_core::AnalyticsReport):
//! - a **heatmap** of favourites per age slice and category, with its
//!   largest cell;
//! - a **weighted popularity ranking** mixing favourite counts, average
//!   ratings and current-week activity, with a week-over-week trend;
//! - **demographic breakdowns** (budget slice per age slice, dominant
//!   category per age slice, favourites per role) and headline KPIs;
//! - the **Pearson correlation** between age and averaged budget and the
//!   **Shannon entropy** of cities per age slice.
//!
//! Computation is synchronous and pure. [`compute_from_source`] adds the
//! loading step on top of a [`FavoriteSource`](placestats_core::FavoriteSource)
//! and degrades to an empty report when the source cannot be read.
//!
//! # Examples
//!
//! ```
//! use placestats_core::{FavoriteInteractionRecord, PlaceAggregates};
//! use placestats_metrics::{EngineConfig, MetricsEngine};
//!
//! let engine = MetricsEngine::try_new(EngineConfig::default().with_top_n(5))
//!     .expect("valid configuration");
//! let records = vec![FavoriteInteractionRecord {
//!     user_id: 1,
//!     lieu_id: 4,
//!     age: 31,
//!     ..FavoriteInteractionRecord::default()
//! }];
//!
//! let report = engine.compute_with(&records, &PlaceAggregates::default());
//! assert_eq!(report.total_users_actifs, 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod pipeline;
mod stats;
mod types;

pub use engine::MetricsEngine;
pub use error::EngineConfigError;
pub use pipeline::compute_from_source;
pub use stats::{pearson, shannon_entropy};
pub use types::{DEFAULT_TOP_N, EngineConfig, ScoreWeights};

//! Error types emitted by the placestats CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use placestats_metrics::EngineConfigError;
use thiserror::Error;

use crate::SnapshotError;

/// Errors emitted by the placestats CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The reference date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid {field} value {value:?}: expected YYYY-MM-DD")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// The engine rejected the resolved configuration.
    #[error("invalid engine configuration: {0}")]
    EngineConfig(#[from] EngineConfigError),
    /// The snapshot file could not be loaded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// Serializing the report failed.
    #[error("failed to serialize report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}

//! Report command implementation for the placestats CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placestats_core::AnalyticsReport;
use placestats_metrics::{DEFAULT_TOP_N, EngineConfig, MetricsEngine, compute_from_source};
use serde::{Deserialize, Serialize};

use crate::{ARG_AS_OF, ARG_SNAPSHOT, ARG_TOP_N, CliError, ENV_SNAPSHOT, SnapshotSource};

/// Accepted format of the `--as-of` reference date.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// CLI arguments for the `report` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute the analytics report for a favourite snapshot. \
                 The snapshot is a JSON export holding the favourite rows, \
                 the birth-date availability flag and per-place ratings and \
                 weekly counts. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Compute the analytics report for a favourite snapshot"
)]
#[ortho_config(prefix = "PLACESTATS")]
pub(crate) struct ReportArgs {
    /// Path to the JSON snapshot file.
    #[arg(long = ARG_SNAPSHOT, value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Reference date for age computation (YYYY-MM-DD). Defaults to today.
    #[arg(long = ARG_AS_OF, value_name = "date")]
    #[serde(default)]
    pub(crate) as_of: Option<String>,
    /// Number of places kept in the popularity ranking.
    #[arg(long = ARG_TOP_N, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
}

impl ReportArgs {
    pub(crate) fn into_config(self) -> Result<ReportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ReportConfig::try_from(merged)
    }
}

/// Resolved `report` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportConfig {
    /// Path to the JSON snapshot file.
    pub(crate) snapshot: Utf8PathBuf,
    /// Reference date for age computation.
    pub(crate) as_of: NaiveDate,
    /// Number of places kept in the popularity ranking.
    pub(crate) top_n: usize,
}

impl ReportConfig {
    pub(crate) fn engine(&self) -> Result<MetricsEngine, CliError> {
        let config = EngineConfig::default().with_top_n(self.top_n);
        Ok(MetricsEngine::try_new(config)?)
    }
}

impl TryFrom<ReportArgs> for ReportConfig {
    type Error = CliError;

    fn try_from(args: ReportArgs) -> Result<Self, Self::Error> {
        let snapshot = args.snapshot.ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_SNAPSHOT,
        })?;
        let as_of = match args.as_of {
            Some(value) => parse_reference_date(&value)?,
            None => Local::now().date_naive(),
        };
        let top_n = args.top_n.unwrap_or(DEFAULT_TOP_N);
        Ok(Self {
            snapshot,
            as_of,
            top_n,
        })
    }
}

fn parse_reference_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| CliError::InvalidDate {
        field: ARG_AS_OF,
        value: value.to_owned(),
        source,
    })
}

pub(super) fn run_report(args: ReportArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_report_with(args, &mut stdout)
}

pub(super) fn run_report_with(args: ReportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_report(&config)?;
    write_report(writer, &report)
}

pub(super) fn execute_report(config: &ReportConfig) -> Result<AnalyticsReport, CliError> {
    let engine = config.engine()?;
    let source = SnapshotSource::open(&config.snapshot)?;
    let report = compute_from_source(&engine, &source, config.as_of);
    info!(
        "computed report for {}: {} favourites across {} places",
        config.snapshot, report.total_favoris, report.total_lieux
    );
    Ok(report)
}

fn write_report(writer: &mut dyn Write, report: &AnalyticsReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ReportConfig, CliError> {
    let merged = ReportArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ReportConfig::try_from(merged)
}

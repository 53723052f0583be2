//! Focused unit tests covering report CLI configuration and output.

use super::helpers::{SnapshotDir, WORKED_SNAPSHOT};
use crate::report::{ReportArgs, ReportConfig, config_from_layers_for_test, run_report_with};
use super::*;
use chrono::NaiveDate;
use placestats_metrics::EngineConfigError;
use rstest::rstest;
use serde_json::Value;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid reference date")
}

#[rstest]
fn converting_without_snapshot_errors() {
    let args = ReportArgs {
        snapshot: None,
        ..ReportArgs::default()
    };

    let err = ReportConfig::try_from(args).expect_err("missing snapshot should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SNAPSHOT);
            assert_eq!(env, ENV_SNAPSHOT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn conversion_applies_defaults() {
    let args = ReportArgs {
        snapshot: Some("snapshot.json".into()),
        as_of: Some(" 2025-03-15 ".to_owned()),
        top_n: None,
    };

    let config = ReportConfig::try_from(args).expect("config should build");
    assert_eq!(config.snapshot, "snapshot.json");
    assert_eq!(config.as_of, reference_date());
    assert_eq!(config.top_n, 10);
}

#[rstest]
fn missing_reference_date_defaults_to_today() {
    let args = ReportArgs {
        snapshot: Some("snapshot.json".into()),
        ..ReportArgs::default()
    };

    let before = chrono::Local::now().date_naive();
    let config = ReportConfig::try_from(args).expect("config should build");
    let after = chrono::Local::now().date_naive();
    assert!(config.as_of >= before && config.as_of <= after);
}

#[rstest]
#[case::words("yesterday")]
#[case::day_first("15/03/2025")]
#[case::impossible("2025-02-30")]
fn invalid_reference_dates_are_rejected(#[case] value: &str) {
    let args = ReportArgs {
        snapshot: Some("snapshot.json".into()),
        as_of: Some(value.to_owned()),
        top_n: None,
    };

    let err = ReportConfig::try_from(args).expect_err("invalid date should error");
    match err {
        CliError::InvalidDate {
            field,
            value: reported,
            ..
        } => {
            assert_eq!(field, ARG_AS_OF);
            assert_eq!(reported, value);
        }
        other => panic!("expected InvalidDate, found {other:?}"),
    }
}

#[rstest]
fn zero_top_n_is_rejected_by_the_engine() {
    let config = ReportConfig {
        snapshot: "snapshot.json".into(),
        as_of: reference_date(),
        top_n: 0,
    };

    let err = config.engine().expect_err("zero top-n should error");
    match err {
        CliError::EngineConfig(EngineConfigError::ZeroTopN) => {}
        other => panic!("expected EngineConfig(ZeroTopN), found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "top_n": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "snapshot": "from-file.json",
            "as_of": "2024-01-01",
            "top_n": 3,
        }),
        None,
    );
    composer.push_environment(json!({
        "snapshot": "from-env.json",
        "top_n": 5,
    }));
    composer.push_cli(json!({
        "top_n": 7,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.snapshot, "from-env.json");
    assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"));
    assert_eq!(config.top_n, 7);
}

#[rstest]
fn report_is_written_as_pretty_json() {
    let dir = SnapshotDir::new();
    let path = dir.write("worked.json", WORKED_SNAPSHOT);
    let args = ReportArgs {
        snapshot: Some(path),
        as_of: Some("2025-03-15".to_owned()),
        top_n: None,
    };

    let mut output = Vec::new();
    run_report_with(args, &mut output).expect("report should be written");

    let text = String::from_utf8(output).expect("utf-8 output");
    assert!(text.ends_with("}\n"));
    let report: Value = serde_json::from_str(&text).expect("report JSON");
    assert_eq!(report["totalFavoris"], 3);
    assert_eq!(report["totalUsersActifs"], 3);
    assert_eq!(report["totalLieux"], 2);
    assert_eq!(report["ageSlices"], serde_json::json!(["18-24", "25-34", "35-49"]));
    assert_eq!(report["heatmap"]["18-24"]["Musée"], 1);
    assert_eq!(report["budgetAge"]["35-49"]["> 80 TND"], 1);
    assert_eq!(report["favorisByRole"]["abonne"], 2);
    assert_eq!(report["topLieux"][0]["lieuId"], 1);
    assert_eq!(report["topLieux"][0]["tendance"], 2.0);
    assert_eq!(report["topLieux"][1]["tendance"], Value::Null);
}

#[rstest]
fn top_n_limits_the_written_ranking() {
    let dir = SnapshotDir::new();
    let path = dir.write("worked.json", WORKED_SNAPSHOT);
    let args = ReportArgs {
        snapshot: Some(path),
        as_of: Some("2025-03-15".to_owned()),
        top_n: Some(1),
    };

    let mut output = Vec::new();
    run_report_with(args, &mut output).expect("report should be written");

    let report: Value = serde_json::from_slice(&output).expect("report JSON");
    let ranking = report["topLieux"].as_array().expect("ranking array");
    assert_eq!(ranking.len(), 1);
}

#[rstest]
fn unreadable_snapshot_fails_the_command() {
    let dir = SnapshotDir::new();
    let args = ReportArgs {
        snapshot: Some(dir.path("missing.json")),
        as_of: Some("2025-03-15".to_owned()),
        top_n: None,
    };

    let mut output = Vec::new();
    let err = run_report_with(args, &mut output).expect_err("missing snapshot should fail");
    assert!(matches!(err, CliError::Snapshot(SnapshotError::Open { .. })));
    assert!(output.is_empty());
}

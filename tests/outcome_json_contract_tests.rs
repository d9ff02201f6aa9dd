use chart_rebase::api::{REBASE_OUTCOME_JSON_SCHEMA_V1, RebaseNotice, RebaseOutcome, ViewMode};
use chart_rebase::core::{Line, RangeRequest, TimeAxis};
use chart_rebase::{RebaseEngine, RebaseEngineConfig};
use serde_json::Value;

fn rebased_outcome() -> RebaseOutcome {
    let mut engine = RebaseEngine::new(RebaseEngineConfig::default()).expect("engine init");
    engine
        .register_chart(
            "factor1",
            TimeAxis::parse(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"]),
            vec![
                Line::new("factor", vec![Some(4.0), None, Some(2.0), Some(3.0)]),
                Line::new("benchmark", vec![Some(1.0), Some(1.0), Some(2.0), Some(2.0)]),
            ],
        )
        .expect("register");
    engine
        .rebase_or_restore("factor1", RangeRequest::from_labels("2024-01-03", "2024-01-04"))
        .expect("rebase")
}

#[test]
fn contract_v1_encodes_missing_cells_as_null_in_line_order() {
    let outcome = rebased_outcome();
    let json = outcome.to_json_contract_v1_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["schema_version"], REBASE_OUTCOME_JSON_SCHEMA_V1);
    assert_eq!(value["outcome"]["mode"], "Rebased");
    assert_eq!(value["outcome"]["anchor"], 2);
    assert_eq!(
        value["outcome"]["arrays"]["factor"],
        serde_json::json!([null, null, 1.0, 1.5])
    );

    let line_order: Vec<&String> = value["outcome"]["arrays"]
        .as_object()
        .expect("arrays object")
        .keys()
        .collect();
    assert_eq!(line_order.len(), 2);
    assert!(json.find("\"factor\"") < json.find("\"benchmark\""));
}

#[test]
fn compat_parser_accepts_bare_and_enveloped_payloads() {
    let outcome = rebased_outcome();
    let enveloped = outcome.to_json_contract_v1_pretty().expect("serialize");
    let bare = serde_json::to_string(&outcome).expect("serialize bare");

    assert_eq!(
        RebaseOutcome::from_json_compat_str(&enveloped).expect("enveloped"),
        outcome
    );
    assert_eq!(RebaseOutcome::from_json_compat_str(&bare).expect("bare"), outcome);
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let outcome = RebaseOutcome {
        mode: ViewMode::Absolute,
        anchor: None,
        arrays: Default::default(),
        notice: Some(RebaseNotice::NoAnchor),
    };
    let mut value: Value =
        serde_json::from_str(&outcome.to_json_contract_v1_pretty().expect("serialize"))
            .expect("json");
    value["schema_version"] = Value::from(99);

    let err = RebaseOutcome::from_json_compat_str(&value.to_string()).expect_err("must fail");
    assert!(format!("{err}").contains("unsupported outcome schema version"));
}

//! End-to-end risk-analysis requests through the JSON handler.

use pathrisk_analysis::sweep::RiskAnalysisService;
use pathrisk_core::config::PathRiskConfig;
use pathrisk_core::errors::error_code;
use serde_json::{json, Value};

fn service() -> RiskAnalysisService {
    RiskAnalysisService::new(&PathRiskConfig::default()).unwrap()
}

fn two_node_request(mode: Option<&str>) -> Value {
    let mut body = json!({
        "nodes": [
            {"id": "1", "label": "Login", "type": "situation", "data": {"nodeType": "initial"}},
            {"id": "2", "label": "Payment", "type": "situation", "data": {"nodeType": "dangerous"}},
            {"id": "3", "label": "Phishing", "type": "event", "data": {"nodeType": "threat"}},
            {"id": "4", "label": "Anomaly detector", "type": "event", "data": {"nodeType": "detection"}}
        ],
        "edges": [
            {"id": "e1", "source": "1", "target": "2", "type": "action", "data": {}},
            {"id": "e2", "source": "2", "target": "3", "type": "event", "data": {"probability": 0.2}},
            {"id": "e3", "source": "2", "target": "4", "type": "event",
             "data": {"probability": 0.8, "secondaryProbability": 0.7}}
        ]
    });
    if let Some(mode) = mode {
        body["type"] = json!(mode);
    }
    body
}

fn run(body: &Value) -> Value {
    let report = service().handle_json(&body.to_string()).unwrap();
    serde_json::to_value(report).unwrap()
}

fn in_unit_interval(v: &Value) -> bool {
    v.as_f64().is_some_and(|x| (0.0..=1.0).contains(&x))
}

#[test]
fn risk_vs_attack_returns_ten_points() {
    let response = run(&two_node_request(Some("risk_vs_attack")));

    assert!(in_unit_interval(&response["risk"]));
    assert_eq!(response["transaction_length"], 2);
    assert_eq!(response["threat_node"], "Payment");

    let points = response["riskAttack"].as_array().unwrap();
    assert_eq!(points.len(), 10);
    let expected = [0.01, 0.11, 0.21, 0.31, 0.41, 0.51, 0.61, 0.71, 0.81, 0.91];
    for (point, pa) in points.iter().zip(expected) {
        assert_eq!(point["PA"].as_f64().unwrap(), pa);
        assert!(in_unit_interval(&point["Risk"]), "risk out of range: {point}");
    }
}

#[test]
fn base_mode_has_only_base_fields() {
    for mode in [None, Some("something_else")] {
        let response = run(&two_node_request(mode));
        let object = response.as_object().unwrap();
        assert_eq!(object.len(), 3, "unexpected fields: {response}");
        assert!(in_unit_interval(&response["risk"]));
    }
}

#[test]
fn two_node_base_risk_matches_reference() {
    // p = [0.95, 0.8], p11 = 0.7, p22 = 0.8.
    let risk = run(&two_node_request(None))["risk"].as_f64().unwrap();
    assert!((risk - 0.095_599).abs() < 1e-12, "risk = {risk}");
}

#[test]
fn base_risk_is_shared_across_modes() {
    let base = run(&two_node_request(None))["risk"].clone();
    for mode in ["risk_vs_attack", "risk_vs_fp_fn", "risk_vs_length", "visualize_node_near_threat"] {
        assert_eq!(run(&two_node_request(Some(mode)))["risk"], base, "mode {mode}");
    }
}

#[test]
fn risk_vs_fp_fn_returns_six_by_six_matrix() {
    let response = run(&two_node_request(Some("risk_vs_fp_fn")));
    let matrix = response["riskMatrix"].as_array().unwrap();
    assert_eq!(matrix.len(), 6);
    for row in matrix {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), 6);
        assert!(row.iter().all(in_unit_interval));
    }
    assert_eq!(response["p12Values"], json!([0.01, 0.10, 0.20, 0.30, 0.40, 0.50]));
    assert_eq!(response["p21Values"], response["p12Values"]);
}

#[test]
fn risk_vs_length_extends_five_steps() {
    let response = run(&two_node_request(Some("risk_vs_length")));
    let lengths: Vec<u64> = response["riskVsLength"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["P_Length"].as_u64().unwrap())
        .collect();
    assert_eq!(lengths, vec![2, 3, 4, 5, 6, 7]);
}

#[test]
fn node_placement_grows_to_twelve() {
    let response = run(&two_node_request(Some("visualize_node_near_threat")));
    let expected: Vec<u64> = (2..=12).collect();
    for key in ["lengthsInsertBefore", "lengthsInsertEnd"] {
        let lengths: Vec<u64> = response[key]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect();
        assert_eq!(lengths, expected, "{key}");
    }
    for key in ["riskValuesInsertBefore", "riskValuesInsertEnd"] {
        let risks = response[key].as_array().unwrap();
        assert_eq!(risks.len(), 11);
        assert!(risks.iter().all(in_unit_interval));
    }
}

#[test]
fn threat_labels_are_oxford_joined() {
    let mut body = two_node_request(None);
    let nodes = body["nodes"].as_array_mut().unwrap();
    nodes.push(json!({"id": "5", "label": "Refund", "type": "situation", "data": {"nodeType": "dangerous"}}));
    nodes.push(json!({"id": "6", "label": "Payout", "type": "situation", "data": {"nodeType": "dangerous"}}));
    let edges = body["edges"].as_array_mut().unwrap();
    edges.push(json!({"id": "e5", "source": "2", "target": "5", "type": "crash", "data": {}}));
    edges.push(json!({"id": "e6", "source": "5", "target": "6", "type": "action", "data": {}}));

    let response = run(&body);
    assert_eq!(response["threat_node"], "Payment, Refund, and Payout");
    assert_eq!(response["transaction_length"], 4);
}

#[test]
fn missing_initial_situation_is_reported() {
    let mut body = two_node_request(Some("risk_vs_attack"));
    body["nodes"][0]["data"]["nodeType"] = json!("normal");
    let payload = service().handle_json(&body.to_string()).unwrap_err();
    assert_eq!(payload.code, error_code::GRAPH_ERROR);
    assert!(payload.error.contains("initial"), "{}", payload.error);
}

#[test]
fn non_numeric_probability_is_reported() {
    let mut body = two_node_request(None);
    body["edges"][1]["data"]["probability"] = json!("high");
    let payload = service().handle_json(&body.to_string()).unwrap_err();
    assert_eq!(payload.code, error_code::REQUEST_ERROR);
}

#[test]
fn sequential_and_parallel_reports_match() {
    let mut config = PathRiskConfig::default();
    config.sweep.parallel = Some(false);
    let sequential = RiskAnalysisService::new(&config).unwrap();
    let body = two_node_request(Some("risk_vs_fp_fn")).to_string();
    assert_eq!(
        sequential.handle_json(&body).unwrap(),
        service().handle_json(&body).unwrap()
    );
}

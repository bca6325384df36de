//! End-to-end: load a document, derive views, query correlations.

use corrnet::{loader, NodeId, Session, Stage};
use pretty_assertions::assert_eq;

/// Three factors, two correlations: the smallest graph that exercises every
/// aggregate and the threshold filter.
const SCENARIO: &str = r#"{
    "nodes": [
        {"numeric_id": 1, "label": "A", "node_type": "Biological",
         "quantum_weight": 0.5, "stage": "Stage1Direct"},
        {"numeric_id": 2, "label": "B", "node_type": "Genomic",
         "quantum_weight": 0.9, "stage": "Stage1Direct"},
        {"numeric_id": 3, "label": "C", "node_type": "Environmental",
         "quantum_weight": 0.2, "stage": "Stage2Indirect"}
    ],
    "edges": [
        {"source": 1, "target": 2, "correlation_strength": 0.85,
         "quantum_entanglement": 0.6, "correlation_type": "direct",
         "stage": "Stage1Direct"},
        {"source": 2, "target": 3, "correlation_strength": 0.4,
         "quantum_entanglement": 0.3, "correlation_type": "indirect",
         "stage": "Stage2Indirect"}
    ]
}"#;

#[test]
fn test_scenario_statistics() {
    let session = Session::new(loader::load_str(SCENARIO).unwrap());
    let stats = session.statistics();

    assert_eq!(stats.total_nodes, 3);
    assert_eq!(stats.total_edges, 2);

    let weight = stats.avg_quantum_weight.value("avg_quantum_weight").unwrap();
    assert!((weight - 0.533_333).abs() < 1e-5, "avg weight was {weight}");

    let corr = stats.avg_correlation.value("avg_correlation").unwrap();
    assert!((corr - 0.625).abs() < 1e-12, "avg correlation was {corr}");
}

#[test]
fn test_scenario_high_correlation() {
    let session = Session::new(loader::load_str(SCENARIO).unwrap());
    let records = session.high_correlation_edges(0.8).unwrap();

    assert_eq!(records.len(), 1, "expected exactly one record above 0.8");
    assert_eq!(records[0].source, "A");
    assert_eq!(records[0].target, "B");
    assert_eq!(records[0].correlation, 0.85);
}

#[test]
fn test_index_traversal() {
    let session = Session::new(loader::load_str(SCENARIO).unwrap());
    let index = session.index().unwrap();

    assert_eq!(index.node(NodeId(3)).unwrap().label, "C");
    let from_b: Vec<NodeId> = index
        .edges_from(NodeId(2))
        .unwrap()
        .map(|e| e.target)
        .collect();
    assert_eq!(from_b, vec![NodeId(3)]);
}

#[test]
fn test_stage_subgraph_invariants() {
    let session = Session::new(loader::load_str(SCENARIO).unwrap());
    let index = session.index().unwrap();

    for stage in Stage::ALL {
        let sub = index.subgraph_by_stage(stage);
        for node in sub.all_nodes() {
            assert_eq!(node.stage, stage);
        }
        for (source, target, _) in sub.all_edges() {
            assert!(sub.contains(source), "edge source {source} missing from subgraph");
            assert!(sub.contains(target), "edge target {target} missing from subgraph");
        }
    }
}

#[test]
fn test_derived_views_are_deterministic() {
    let session = Session::new(loader::load_str(SCENARIO).unwrap());

    assert_eq!(session.statistics(), session.statistics());
    assert_eq!(
        session.high_correlation_edges(0.3).unwrap(),
        session.high_correlation_edges(0.3).unwrap(),
    );
}

#[test]
fn test_report_serializes() {
    let session = Session::new(loader::load_str(SCENARIO).unwrap());
    let report = session.report(0.8).unwrap();
    let json = report.to_json_pretty().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["statistics"]["total_nodes"], 3);
    assert_eq!(value["threshold"], 0.8);
    assert_eq!(value["high_correlations"][0]["source"], "A");
    assert_eq!(value["high_correlations"][0]["type"], "direct");
}

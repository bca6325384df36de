//! Property tests for the correlation analyzer.

use corrnet::model::{Document, Edge, Node, NodeType, Stage};
use corrnet::{analyzer, GraphIndex};
use proptest::prelude::*;

/// Arbitrary valid documents: `n` nodes, edges wired between them by index.
fn arb_document() -> impl Strategy<Value = Document> {
    (1usize..8).prop_flat_map(|n| {
        let edges = prop::collection::vec(
            (0..n, 0..n, 0.0f64..=1.0, 0.0f64..=1.0),
            0..24,
        );
        edges.prop_map(move |specs| {
            let nodes: Vec<Node> = (0..n)
                .map(|i| {
                    Node::new(i as u64, format!("factor-{i}"), NodeType::Biological, Stage::Stage1Direct)
                        .with_quantum_weight(0.5)
                })
                .collect();
            let edges: Vec<Edge> = specs
                .into_iter()
                .map(|(s, t, strength, entanglement)| {
                    Edge::new(s as u64, t as u64, strength, "Correlative", Stage::Stage1Direct)
                        .with_quantum_entanglement(entanglement)
                })
                .collect();
            Document::new(nodes, edges).unwrap()
        })
    })
}

proptest! {
    /// Raising the threshold can only shrink the result, never change what
    /// qualifies: high(t2) is a subset of high(t1) whenever t1 <= t2.
    #[test]
    fn threshold_monotonicity(doc in arb_document(), t1 in 0.0f64..=1.0, t2 in 0.0f64..=1.0) {
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let index = GraphIndex::build(&doc).unwrap();
        let loose = analyzer::high_correlation_edges(&index, lo).unwrap();
        let strict = analyzer::high_correlation_edges(&index, hi).unwrap();

        prop_assert!(strict.len() <= loose.len());
        for rec in &strict {
            prop_assert!(loose.contains(rec), "{rec:?} missing at lower threshold");
        }
    }

    /// Output is non-increasing in correlation strength.
    #[test]
    fn ordering_invariant(doc in arb_document(), threshold in 0.0f64..=1.0) {
        let index = GraphIndex::build(&doc).unwrap();
        let records = analyzer::high_correlation_edges(&index, threshold).unwrap();
        for pair in records.windows(2) {
            prop_assert!(pair[0].correlation >= pair[1].correlation);
        }
    }

    /// Same document, same answer — twice.
    #[test]
    fn analysis_is_deterministic(doc in arb_document(), threshold in 0.0f64..=1.0) {
        let index = GraphIndex::build(&doc).unwrap();
        let first = analyzer::high_correlation_edges(&index, threshold).unwrap();
        let second = analyzer::high_correlation_edges(&index, threshold).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every record selected by the inclusive threshold actually qualifies,
    /// and nothing qualifying is dropped.
    #[test]
    fn selection_is_exact(doc in arb_document(), threshold in 0.0f64..=1.0) {
        let index = GraphIndex::build(&doc).unwrap();
        let records = analyzer::high_correlation_edges(&index, threshold).unwrap();
        let qualifying = doc
            .edges()
            .iter()
            .filter(|e| e.correlation_strength >= threshold)
            .count();
        prop_assert_eq!(records.len(), qualifying);
        for rec in &records {
            prop_assert!(rec.correlation >= threshold);
        }
    }
}

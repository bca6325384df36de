//! Correlation-strength filtering and ranking.

use serde::Serialize;

use crate::index::GraphIndex;
use crate::model::Stage;
use crate::Result;

/// One high-correlation edge, resolved to endpoint labels for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationRecord {
    pub source: String,
    pub target: String,
    pub correlation: f64,
    pub entanglement: f64,
    #[serde(rename = "type")]
    pub correlation_type: String,
    pub stage: Stage,
}

/// Every edge with `correlation_strength >= threshold`, strongest first.
///
/// The boundary is inclusive. Ties keep their relative document order (the
/// sort is stable; no secondary key is defined). `threshold` is not bounds-
/// checked — values outside `0..=1` are legal and simply select more or
/// fewer edges.
///
/// Endpoint labels are resolved through the index; an edge referencing an
/// absent node id is an upstream invariant violation and surfaces as
/// [`crate::Error::Lookup`] rather than a panic.
pub fn high_correlation_edges(
    index: &GraphIndex,
    threshold: f64,
) -> Result<Vec<CorrelationRecord>> {
    let mut records = Vec::new();

    for (source, target, edge) in index.all_edges() {
        if edge.correlation_strength >= threshold {
            records.push(CorrelationRecord {
                source: index.node(source)?.label.clone(),
                target: index.node(target)?.label.clone(),
                correlation: edge.correlation_strength,
                entanglement: edge.quantum_entanglement,
                correlation_type: edge.correlation_type.clone(),
                stage: edge.stage,
            });
        }
    }

    // Descending by strength; stable, so ties retain input order. NaN
    // strengths sort as equal to everything, which keeps them where the
    // document put them instead of poisoning the order.
    records.sort_by(|a, b| {
        b.correlation
            .partial_cmp(&a.correlation)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(records)
}

//! Export formats for external renderers.
//!
//! The core does not render anything itself; it hands a renderer the data it
//! needs. Four shapes come out of here:
//!
//! - the document schema itself (compact or pretty JSON) — round-trips
//!   through the loader
//! - the "full" document with a `metadata` wrapper (counts, stage list,
//!   average entanglement, generation timestamp)
//! - the document wrapped as a JS assignment for direct inclusion by a
//!   browser-side script
//! - per-stage induced subgraphs, tagged with their stage
//!
//! Plus the [`AnalysisReport`]: statistics and ranked correlation records
//! for display or further processing.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::analyzer::CorrelationRecord;
use crate::index::GraphIndex;
use crate::model::{Document, Edge, Node, Stage};
use crate::stats::{Mean, Statistics};
use crate::Result;

/// Statistics plus ranked high-correlation records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub statistics: Statistics,
    pub threshold: f64,
    pub high_correlations: Vec<CorrelationRecord>,
}

impl AnalysisReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        to_string_pretty(self)
    }
}

/// Compact JSON in the document schema. Round-trips through the loader.
pub fn to_json(document: &Document) -> Result<String> {
    Ok(serde_json::to_string(document).map_err(std::io::Error::from)?)
}

/// Pretty-printed JSON in the document schema.
pub fn to_json_pretty(document: &Document) -> Result<String> {
    to_string_pretty(document)
}

/// Pretty JSON with a `metadata` wrapper: counts, the stages present (in
/// stage order), average entanglement, and an RFC 3339 generation timestamp.
/// The loader accepts and ignores the wrapper.
pub fn to_json_full(document: &Document) -> Result<String> {
    let stats = Statistics::summarize(document);
    let stages: Vec<&str> = stats.stages.keys().map(Stage::as_str).collect();
    let entanglement_avg = match stats.avg_entanglement {
        Mean::Value(v) => Some(v),
        Mean::NoData => None,
    };

    to_string_pretty(&json!({
        "nodes": document.nodes(),
        "edges": document.edges(),
        "metadata": {
            "total_nodes": stats.total_nodes,
            "total_edges": stats.total_edges,
            "stages": stages,
            "quantum_correlation_average": entanglement_avg,
            "generated_at": Utc::now().to_rfc3339(),
        },
    }))
}

/// The document as a `const graphData = ...;` assignment, for inclusion by
/// a browser-side visualization script.
pub fn to_js(document: &Document) -> Result<String> {
    Ok(format!("const graphData = {};", to_json_pretty(document)?))
}

/// Pretty JSON for the induced subgraph of one stage, tagged with the stage.
pub fn stage_filtered_json(index: &GraphIndex, stage: Stage) -> Result<String> {
    let sub = index.subgraph_by_stage(stage);
    let nodes: Vec<&Node> = sub.all_nodes().collect();
    let edges: Vec<&Edge> = sub.all_edges().map(|(_, _, e)| e).collect();

    to_string_pretty(&json!({
        "stage": stage.as_str(),
        "nodes": nodes,
        "edges": edges,
    }))
}

/// Writer-based variant of [`to_json_pretty`].
pub fn write_document(document: &Document, writer: &mut dyn Write) -> Result<()> {
    writer.write_all(to_json_pretty(document)?.as_bytes())?;
    Ok(())
}

fn to_string_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value).map_err(std::io::Error::from)?)
}

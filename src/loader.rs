//! Loader for serialized correlation graph documents.
//!
//! The wire schema is a JSON object with `nodes` and `edges` arrays (see the
//! model types for field names). Extra top-level keys — the full export
//! format carries a `metadata` wrapper — are ignored.
//!
//! Error classes are kept distinct so callers can tell bad bytes from bad
//! data:
//!
//! - [`Error::Parse`] — the input is not valid JSON at all
//! - [`Error::Schema`] — valid JSON missing required fields, with wrong
//!   types, or with an unrecognized `node_type`/`stage` value
//! - [`Error::Integrity`] — structurally complete but self-inconsistent:
//!   duplicate node ids or dangling edge endpoints

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::model::{Document, Edge, Node};
use crate::{Error, Result};

/// Raw document shape before integrity validation. Field-level schema
/// checking (presence, types, closed enums) happens during deserialization
/// into the typed model records.
#[derive(Deserialize)]
struct RawDocument {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

/// Parse and validate a serialized document from a string.
pub fn load_str(input: &str) -> Result<Document> {
    // Syntax first: a failure here is a parse error, not a schema error.
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| Error::Parse(e.to_string()))?;

    let raw: RawDocument =
        serde_json::from_value(value).map_err(|e| Error::Schema(e.to_string()))?;

    let document = Document::new(raw.nodes, raw.edges)?;
    info!(
        nodes = document.node_count(),
        edges = document.edge_count(),
        "loaded correlation graph document"
    );
    Ok(document)
}

/// Parse and validate a serialized document from a reader.
pub fn load_reader(mut reader: impl Read) -> Result<Document> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    load_str(&buf)
}

/// Parse and validate a serialized document from a file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading correlation graph document");
    load_reader(File::open(path)?)
}

//! # corrnet — Multi-Stage Correlation Network Analysis
//!
//! A typed data model and analysis engine for weighted correlation networks
//! between epidemiological risk factors (biological, comorbidity,
//! socioeconomic, environmental, genomic, ...).
//!
//! ## Design Principles
//!
//! 1. **Validate once, at the boundary**: a [`Document`] cannot exist with a
//!    duplicate node id or a dangling edge — the loader rejects it wholesale.
//! 2. **Immutable documents, derived views**: [`GraphIndex`] and
//!    [`Statistics`] are read-only projections computed on demand.
//! 3. **Context passing, no ambient state**: a [`Session`] owns exactly one
//!    Document and hands it to whichever view you ask for. Multiple sessions
//!    coexist in one process.
//! 4. **The generator is a collaborator**: rebuilding the graph shells out to
//!    an external process and is modelled as an explicit [`Generator`] with a
//!    result, never as an implicit rebuild-then-continue flow.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use corrnet::Session;
//!
//! # fn example() -> corrnet::Result<()> {
//! let mut session = Session::open("correlation_graph.json")?;
//!
//! let stats = session.statistics();
//! println!("{} nodes / {} edges", stats.total_nodes, stats.total_edges);
//!
//! for rec in session.high_correlation_edges(0.8)? {
//!     println!("{} → {} ({:.3})", rec.source, rec.target, rec.correlation);
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod loader;
pub mod index;
pub mod stats;
pub mod analyzer;
pub mod export;
pub mod rebuild;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Document, Edge, Node, NodeId, NodeType, Stage};

// ============================================================================
// Re-exports: Derived views
// ============================================================================

pub use analyzer::CorrelationRecord;
pub use export::AnalysisReport;
pub use index::GraphIndex;
pub use stats::{Mean, Statistics};

// ============================================================================
// Re-exports: Rebuild
// ============================================================================

pub use rebuild::Generator;

use std::path::Path;

// ============================================================================
// Session — one Document per analysis session
// ============================================================================

/// An analysis session holding exactly one loaded [`Document`].
///
/// Derived views (index, statistics, correlation records) are computed on
/// demand from the held document. A failed [`rebuild`](Session::rebuild)
/// leaves the previously loaded document untouched.
pub struct Session {
    document: Document,
}

impl Session {
    /// Wrap an already-validated document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Load a serialized graph document from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(loader::load_path(path)?))
    }

    /// The document this session is analyzing.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Build the adjacency-indexed directed view of the document.
    pub fn index(&self) -> Result<GraphIndex> {
        GraphIndex::build(&self.document)
    }

    /// Aggregate counts and numeric summaries over the document.
    pub fn statistics(&self) -> Statistics {
        Statistics::summarize(&self.document)
    }

    /// Edges at or above `threshold` correlation strength, strongest first.
    pub fn high_correlation_edges(&self, threshold: f64) -> Result<Vec<CorrelationRecord>> {
        let index = self.index()?;
        analyzer::high_correlation_edges(&index, threshold)
    }

    /// Statistics plus ranked correlation records, ready for serialization.
    pub fn report(&self, threshold: f64) -> Result<AnalysisReport> {
        Ok(AnalysisReport {
            statistics: self.statistics(),
            threshold,
            high_correlations: self.high_correlation_edges(threshold)?,
        })
    }

    /// Re-run the external generator and replace the held document with its
    /// output. On any failure the previous document remains valid and the
    /// error is returned to the caller.
    pub fn rebuild(&mut self, generator: &Generator) -> Result<&Document> {
        let document = generator.rebuild()?;
        self.document = document;
        Ok(&self.document)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was not syntactically valid JSON.
    #[error("malformed graph document: {0}")]
    Parse(String),

    /// Well-formed input that violates the document schema: a missing
    /// required field, a wrong type, or an unrecognized `node_type`/`stage`.
    #[error("schema error: {0}")]
    Schema(String),

    /// Duplicate node id or edge endpoint that resolves to no node.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// A mean was requested over an empty collection.
    #[error("no data: cannot compute {0} over an empty collection")]
    NoData(&'static str),

    /// An index query referenced a node id absent from the index. Indicates
    /// an upstream invariant violation, reported rather than panicking.
    #[error("lookup error: no node with id {0}")]
    Lookup(NodeId),

    /// The external generator exited non-zero. Carries its diagnostic
    /// output verbatim.
    #[error("graph rebuild failed: {0}")]
    RebuildFailed(String),

    /// The generator reported success but its output artifact is missing.
    #[error("rebuild artifact missing: {}", .0.display())]
    ArtifactMissing(std::path::PathBuf),

    /// The generator exceeded the configured timeout and was killed.
    #[error("graph rebuild timed out after {0:?}")]
    RebuildTimeout(std::time::Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! # Correlation Graph Model
//!
//! Typed records for the correlation network: nodes (risk factors), edges
//! (weighted correlations), and the validated [`Document`] that holds them.
//! These types cross every boundary: loader ↔ index ↔ statistics ↔ export.
//!
//! Design rule: this module is pure data — no I/O, no process state. The
//! only logic here is structural validation, and it runs exactly once, when
//! a [`Document`] is constructed.

pub mod node;
pub mod edge;
pub mod stage;
pub mod document;

pub use document::Document;
pub use edge::Edge;
pub use node::{Node, NodeId, NodeType};
pub use stage::Stage;

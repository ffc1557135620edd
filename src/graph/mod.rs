//! Core graph data structures
//!
//! Defines NodeId, Node, Edge, and the StixGraph builder.

mod ids;
mod node;
mod stix_graph;
mod summary;

pub use ids::NodeId;
pub use node::{Edge, Node, APPLIED_TO, REFERS_TO};
pub use stix_graph::StixGraph;
pub use summary::{GraphSummary, UNCLASSIFIED};

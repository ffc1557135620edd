//! STIXView - interactive graphs of STIX 2.1 threat intelligence
//!
//! Builds a node/edge graph from STIX objects, relationships and bundles and
//! renders it as a self-contained vis-network HTML page, with an icon per
//! object type and style.
//!
//! # Architecture
//!
//! - **graph**: Core data structures (NodeId, Node, Edge, StixGraph)
//! - **registry**: Custom STIX type descriptors (icon or colour, label field)
//! - **icons**: Icon styles and asset resolution
//! - **render**: Renderer seam and the vis-network HTML writer
//! - **config**: YAML configuration and validation
//!
//! Type classification and the STIX object model live in the `stix` crate.
//!
//! # Example
//!
//! ```no_run
//! use stixview::render::RenderOptions;
//! use stixview::StixGraph;
//!
//! # fn main() -> stixview::Result<()> {
//! let mut graph = StixGraph::new("/usr/share/stixview/icons");
//! graph.add_bundle(std::fs::read_to_string("bundle.json")?)?;
//! graph.write_html("graph.html", "square-flat", &RenderOptions::default())?;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod graph;
pub mod registry;

// Rendering
pub mod icons;
pub mod render;

// Ambient
pub mod diagnostic;
pub mod logging;
pub mod style;

// Re-exports
pub use diagnostic::Diagnostic;
pub use error::{Result, StixViewError};
pub use graph::StixGraph;
pub use registry::{CustomTypeRegistry, CustomTypeSpec};
pub use stix::{Category, StixInput};

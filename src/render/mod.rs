//! Rendering
//!
//! The graph builder only talks to a [`Renderer`]: one call per node and one
//! per edge. [`VisNetwork`] is the bundled implementation and produces an
//! interactive vis-network HTML document.

mod options;
mod vis_network;

pub use options::{ButtonPanel, PhysicsConfig, RenderOptions, RenderTarget};
pub use vis_network::VisNetwork;

use crate::diagnostic::Diagnostic;
use crate::icons::Visual;

/// A node as handed to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub id: String,
    pub label: String,
    pub visual: Visual,
    /// Hover text, the pretty-printed STIX object
    pub title: String,
    /// Category name, or the declared type for unclassified objects
    pub group: String,
}

/// An edge as handed to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub weight: f64,
}

/// Sink for graph elements
pub trait Renderer {
    fn add_node(&mut self, node: RenderNode);
    fn add_edge(&mut self, edge: RenderEdge);
}

/// A generated document and the diagnostics raised while building it
#[derive(Debug, Clone)]
pub struct Rendered {
    pub document: String,
    pub diagnostics: Vec<Diagnostic>,
}

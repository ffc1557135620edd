//! STIX graph builder
//!
//! Accumulates a node table and an edge list from STIX objects, relationships
//! and bundles, then replays them into a [`Renderer`] on demand.
//!
//! Edges are append-only and endpoints are not checked against the node
//! table, so a relationship may be added before (or without) its endpoints.

use super::{Edge, GraphSummary, Node, NodeId, APPLIED_TO, REFERS_TO};
use crate::config::StixViewConfig;
use crate::diagnostic::Diagnostic;
use crate::icons::{IconResolver, IconStyle};
use crate::registry::{CustomTypeRegistry, CustomTypeSpec};
use crate::render::{RenderEdge, RenderNode, RenderOptions, Rendered, Renderer, VisNetwork};
use crate::{Result, StixViewError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use stix::{Bundle, Relationship, StixInput, StixObject, TlpLevel};

/// Serialized form of a graph
#[derive(Debug, Serialize, Deserialize)]
struct GraphExport {
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
}

/// Borrowed view used for export without cloning the graph
#[derive(Serialize)]
struct GraphExportRef<'a> {
    nodes: &'a BTreeMap<NodeId, Node>,
    edges: &'a [Edge],
}

/// A graph of STIX objects
///
/// Owned by a single caller; not meant to be shared across threads without
/// external synchronization.
#[derive(Debug, Clone)]
pub struct StixGraph {
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    custom_types: CustomTypeRegistry,
    icons_root: PathBuf,
    diagnostics: Vec<Diagnostic>,
}

impl StixGraph {
    /// Create an empty graph that looks up icons under `icons_root`
    pub fn new(icons_root: impl Into<PathBuf>) -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            custom_types: CustomTypeRegistry::new(),
            icons_root: icons_root.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Create an empty graph and register the configured custom types
    pub fn from_config(config: &StixViewConfig) -> Result<Self> {
        let mut graph = Self::new(&config.icons_root);
        for spec in &config.custom_types {
            graph.add_custom_type(spec.clone())?;
        }
        Ok(graph)
    }

    pub fn icons_root(&self) -> &Path {
        &self.icons_root
    }

    /// Register a custom STIX type
    ///
    /// See [`CustomTypeRegistry::register`] for the failure modes.
    pub fn add_custom_type(&mut self, spec: CustomTypeSpec) -> Result<()> {
        self.custom_types.register(spec)
    }

    pub fn custom_types(&self) -> &CustomTypeRegistry {
        &self.custom_types
    }

    /// Add a single STIX object as a node
    ///
    /// Accepts a parsed object, a JSON string, or a JSON value. A node with the
    /// same id is replaced.
    ///
    /// # Errors
    /// Fails without touching the graph if the input cannot be parsed, has no
    /// declared type, or is a relationship or bundle.
    pub fn add_node(&mut self, input: impl Into<StixInput>) -> Result<()> {
        let object = input.into().into_object()?;
        if object.is_relationship() || object.is_bundle() {
            return Err(StixViewError::InvalidInput(format!(
                "expected a STIX object, found a {}; use add_{} instead",
                object.object_type, object.object_type
            )));
        }
        self.insert_node(&object)
    }

    /// Add a relationship as an edge from `source_ref` to `target_ref`
    pub fn add_relationship(&mut self, input: impl Into<StixInput>) -> Result<()> {
        let relationship = Relationship::from_input(input)?;
        self.push_relationship(relationship);
        Ok(())
    }

    /// Add every object of a bundle
    ///
    /// Relationships become edges, other objects become nodes. Markings
    /// referenced by an object add the TLP definition node and an `applied-to`
    /// edge. Once all objects are in, `object_refs` produce `refers-to` edges.
    ///
    /// Not transactional: objects added before a failing one stay in the graph.
    pub fn add_bundle(&mut self, input: impl Into<StixInput>) -> Result<()> {
        let bundle = Bundle::from_input(input)?;
        tracing::info!(bundle = %bundle.id, objects = bundle.objects.len(), "Adding bundle");

        let bundle_ids: HashSet<&str> = bundle.objects.iter().map(|o| o.id.as_str()).collect();

        for object in &bundle.objects {
            if object.is_relationship() {
                self.push_relationship(Relationship::from_object(object.clone())?);
                continue;
            }

            self.insert_node(object)?;

            let marking_refs = object
                .granular_marking_refs()
                .into_iter()
                .chain(object.object_marking_refs());
            for marking_ref in marking_refs {
                let known = bundle_ids.contains(marking_ref);
                self.attach_marking(marking_ref, &object.id, known)?;
            }
        }

        for object in &bundle.objects {
            for target in object.object_refs() {
                self.edges
                    .push(Edge::new(object.id.as_str(), target, REFERS_TO));
            }
        }

        Ok(())
    }

    /// Add any STIX content, dispatching on its declared type
    pub fn ingest(&mut self, input: impl Into<StixInput>) -> Result<()> {
        let object = input.into().into_object()?;
        match object.object_type.as_str() {
            "bundle" => self.add_bundle(object),
            "relationship" => self.add_relationship(object),
            _ => self.insert_node(&object),
        }
    }

    fn insert_node(&mut self, object: &StixObject) -> Result<()> {
        let node = Node::from_object(object)?;

        if node.stix_type.is_none() && !self.custom_types.contains(&object.object_type) {
            self.diagnostics.push(
                Diagnostic::UnknownType {
                    object_type: object.object_type.clone(),
                    id: object.id.clone(),
                }
                .emit(),
            );
        }

        let id = NodeId::new(object.id.as_str());
        tracing::debug!(id = %id, stix_type = ?node.stix_type, "Adding node");
        if self.nodes.insert(id, node).is_some() {
            tracing::debug!(id = %object.id, "Replaced existing node");
        }
        Ok(())
    }

    fn push_relationship(&mut self, relationship: Relationship) {
        tracing::debug!(
            source = %relationship.source_ref,
            target = %relationship.target_ref,
            relationship_type = %relationship.relationship_type,
            "Adding relationship"
        );
        self.edges.push(Edge::new(
            relationship.source_ref,
            relationship.target_ref,
            relationship.relationship_type,
        ));
    }

    /// Add the marking node (for TLP) and the `applied-to` edge
    fn attach_marking(&mut self, marking_ref: &str, object_id: &str, in_bundle: bool) -> Result<()> {
        match TlpLevel::from_marking_id(marking_ref) {
            Some(level) => {
                if !self.nodes.contains_key(marking_ref) {
                    self.insert_node(&level.definition())?;
                }
            }
            None if !in_bundle && !self.nodes.contains_key(marking_ref) => {
                self.diagnostics.push(
                    Diagnostic::UnknownMarking {
                        marking_ref: marking_ref.to_string(),
                        object_id: object_id.to_string(),
                    }
                    .emit(),
                );
            }
            None => {}
        }

        self.edges.push(Edge::new(marking_ref, object_id, APPLIED_TO));
        Ok(())
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Diagnostics raised while adding content
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the diagnostics raised while adding content
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Node counts per category and edge counts per relation
    pub fn summary(&self) -> GraphSummary {
        GraphSummary::from_parts(self.nodes.values(), &self.edges)
    }

    /// Replay the graph into a renderer
    ///
    /// Every node gets its icon or colour resolved for `style`. Returns the
    /// diagnostics raised during icon resolution.
    ///
    /// # Errors
    /// `InvalidStyle` for an unknown style literal; `MissingVisual` for a
    /// custom type registered without icon or colour.
    pub fn render_into<R: Renderer>(
        &self,
        style: &str,
        edge_weight: f64,
        renderer: &mut R,
    ) -> Result<Vec<Diagnostic>> {
        let style: IconStyle = style.parse()?;
        let mut resolver = IconResolver::new(&self.icons_root);
        let mut diagnostics = Vec::new();

        for (id, node) in &self.nodes {
            let object_type = node.object_type();
            let resolved = resolver.resolve(
                node.stix_type,
                object_type,
                id.as_str(),
                style,
                &self.custom_types,
            )?;
            diagnostics.extend(resolved.diagnostic);

            let label_field = self
                .custom_types
                .get(object_type)
                .map(|d| d.label_field.as_str())
                .unwrap_or("name");

            renderer.add_node(RenderNode {
                id: id.to_string(),
                label: node.label(label_field),
                visual: resolved.visual,
                title: node.stix.clone(),
                group: node
                    .stix_type
                    .map(|c| c.as_str().to_string())
                    .unwrap_or_else(|| object_type.to_string()),
            });
        }

        for edge in &self.edges {
            renderer.add_edge(RenderEdge {
                from: edge.from.to_string(),
                to: edge.to.to_string(),
                label: edge.relation.clone(),
                weight: edge_weight,
            });
        }

        Ok(diagnostics)
    }

    /// Render the graph as a vis-network HTML document
    pub fn render(&self, style: &str, options: &RenderOptions) -> Result<Rendered> {
        let mut network = VisNetwork::new();
        let diagnostics = self.render_into(style, options.edge_weight, &mut network)?;
        let document = network.generate_html(options)?;

        tracing::info!(
            nodes = network.node_count(),
            edges = network.edge_count(),
            warnings = diagnostics.len(),
            "Rendered graph"
        );

        Ok(Rendered {
            document,
            diagnostics,
        })
    }

    /// Render and write the document to `path`
    pub fn write_html(
        &self,
        path: impl AsRef<Path>,
        style: &str,
        options: &RenderOptions,
    ) -> Result<Vec<Diagnostic>> {
        let path = path.as_ref();
        let rendered = self.render(style, options)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, rendered.document)?;
        tracing::info!(path = %path.display(), "Saved graph");

        Ok(rendered.diagnostics)
    }

    /// Serialize nodes and edges to JSON
    ///
    /// Shape: `{"nodes": {id: {...fields, "stix_type", "stix"}}, "edges": [{"from", "to", "type"}]}`.
    /// Node keys are sorted, so equal graphs export identically.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&GraphExportRef {
            nodes: &self.nodes,
            edges: &self.edges,
        })?)
    }

    /// Load the output of [`export_json`](Self::export_json) into this graph
    ///
    /// Nodes replace existing nodes with the same id; edges are appended.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let export: GraphExport =
            serde_json::from_str(json).map_err(|e| StixViewError::Parse(e.to_string()))?;

        for (id, node) in &export.nodes {
            if node.id() != id.as_str() {
                return Err(StixViewError::InvalidInput(format!(
                    "node key {} does not match its id {}",
                    id,
                    node.id()
                )));
            }
        }

        tracing::debug!(
            nodes = export.nodes.len(),
            edges = export.edges.len(),
            "Loading exported graph"
        );
        self.nodes.extend(export.nodes);
        self.edges.extend(export.edges);
        Ok(())
    }
}

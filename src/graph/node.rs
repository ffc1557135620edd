//! Node and edge records
//!
//! A node keeps the original object's properties verbatim plus two enrichment
//! fields: the classifier's `stix_type` and a pretty-printed `stix` string used
//! as hover text.

use super::NodeId;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stix::{classify, Category, StixObject};

/// Relation label of edges derived from `object_refs`
pub const REFERS_TO: &str = "refers-to";

/// Relation label of edges from a marking definition to a marked object
pub const APPLIED_TO: &str = "applied-to";

/// A graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Original object properties, including `id` and `type`
    #[serde(flatten)]
    pub fields: Map<String, Value>,

    /// Category assigned by the classifier; `None` for custom or unknown types
    pub stix_type: Option<Category>,

    /// Pretty-printed JSON of the original object
    pub stix: String,
}

impl Node {
    /// Build a node from a parsed object, classifying and serializing it
    pub fn from_object(object: &StixObject) -> Result<Self> {
        Ok(Self {
            fields: object.to_map(),
            stix_type: classify(object),
            stix: object.to_pretty_json()?,
        })
    }

    pub fn id(&self) -> &str {
        self.fields.get("id").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn object_type(&self) -> &str {
        self.fields
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Display label
    ///
    /// Uses `label_field` if present, then `name`, then `value`, then the id.
    pub fn label(&self, label_field: &str) -> String {
        [label_field, "name", "value"]
            .iter()
            .find_map(|field| match self.fields.get(*field) {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| self.id().to_string())
    }

    /// Rebuild the original object
    pub fn to_object(&self) -> Result<StixObject> {
        Ok(StixObject::from_value(Value::Object(self.fields.clone()))?)
    }
}

/// A directed, labelled edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Relationship type, `refers-to`, or `applied-to`
    #[serde(rename = "type")]
    pub relation: String,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, relation: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation: relation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> StixObject {
        StixObject::from_value(value).unwrap()
    }

    #[test]
    fn test_node_enrichment() {
        let node = Node::from_object(&object(json!({
            "type": "malware",
            "id": "malware--d1c612bc-146f-4b65-b7b0-9a54a14150a4",
            "name": "Poison Ivy"
        })))
        .unwrap();

        assert_eq!(node.id(), "malware--d1c612bc-146f-4b65-b7b0-9a54a14150a4");
        assert_eq!(node.object_type(), "malware");
        assert_eq!(node.stix_type, Some(Category::DomainObject));
        assert!(node.stix.contains("\"name\": \"Poison Ivy\""));
    }

    #[test]
    fn test_label_fallbacks() {
        let observable = Node::from_object(&object(json!({
            "type": "ipv4-addr",
            "id": "ipv4-addr--ff26c055-6336-5bc5-b98d-13d6226742dd",
            "value": "198.51.100.3"
        })))
        .unwrap();
        assert_eq!(observable.label("name"), "198.51.100.3");

        let custom = Node::from_object(&object(json!({
            "type": "x-test",
            "id": "x-test--45d71d3d-52bd-4300-815a-78c434d4d50c",
            "name": "Test",
            "title": "Custom title"
        })))
        .unwrap();
        assert_eq!(custom.label("title"), "Custom title");
        assert_eq!(custom.label("missing"), "Test");

        let bare = Node::from_object(&object(json!({
            "type": "x-bare",
            "id": "x-bare--1"
        })))
        .unwrap();
        assert_eq!(bare.label("name"), "x-bare--1");
    }

    #[test]
    fn test_serialized_shape() {
        let node = Node::from_object(&object(json!({
            "type": "x-test",
            "id": "x-test--1",
            "name": "Test"
        })))
        .unwrap();

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["name"], "Test");
        assert_eq!(value["type"], "x-test");
        assert_eq!(value["stix_type"], Value::Null);
        assert!(value["stix"].is_string());

        let back: Node = serde_json::from_value(value).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_to_object_round_trip() {
        let original = object(json!({
            "type": "tool",
            "id": "tool--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f",
            "name": "nmap",
            "tool_types": ["information-gathering"]
        }));
        let node = Node::from_object(&original).unwrap();
        assert_eq!(node.to_object().unwrap(), original);
    }

    #[test]
    fn test_edge_serialization() {
        let edge = Edge::new("report--1", "malware--1", REFERS_TO);
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, r#"{"from":"report--1","to":"malware--1","type":"refers-to"}"#);
    }
}

//! Graph statistics

use super::{Edge, Node};
use serde::Serialize;
use std::collections::BTreeMap;

/// Key used for nodes whose type the classifier does not know
pub const UNCLASSIFIED: &str = "custom";

/// Node and edge counts of a graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    /// Node count per category (`custom` for unclassified types)
    pub by_category: BTreeMap<String, usize>,
    /// Node count per declared type
    pub by_type: BTreeMap<String, usize>,
    /// Edge count per relation label
    pub by_relation: BTreeMap<String, usize>,
}

impl GraphSummary {
    pub(crate) fn from_parts<'a>(nodes: impl Iterator<Item = &'a Node>, edges: &[Edge]) -> Self {
        let mut summary = Self::default();

        for node in nodes {
            summary.nodes += 1;
            let category = node.stix_type.map(|c| c.as_str()).unwrap_or(UNCLASSIFIED);
            *summary.by_category.entry(category.to_string()).or_default() += 1;
            *summary
                .by_type
                .entry(node.object_type().to_string())
                .or_default() += 1;
        }

        for edge in edges {
            summary.edges += 1;
            *summary.by_relation.entry(edge.relation.clone()).or_default() += 1;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{APPLIED_TO, REFERS_TO};
    use serde_json::json;
    use stix::StixObject;

    fn node(value: serde_json::Value) -> Node {
        Node::from_object(&StixObject::from_value(value).unwrap()).unwrap()
    }

    #[test]
    fn test_counts() {
        let nodes = vec![
            node(json!({"type": "malware", "id": "malware--1"})),
            node(json!({"type": "tool", "id": "tool--1"})),
            node(json!({"type": "ipv4-addr", "id": "ipv4-addr--1", "value": "10.0.0.1"})),
            node(json!({"type": "x-test", "id": "x-test--1"})),
        ];
        let edges = vec![
            Edge::new("malware--1", "tool--1", "uses"),
            Edge::new("report--1", "malware--1", REFERS_TO),
            Edge::new("report--1", "tool--1", REFERS_TO),
            Edge::new("marking-definition--1", "tool--1", APPLIED_TO),
        ];

        let summary = GraphSummary::from_parts(nodes.iter(), &edges);
        assert_eq!(summary.nodes, 4);
        assert_eq!(summary.edges, 4);
        assert_eq!(summary.by_category["sdo"], 2);
        assert_eq!(summary.by_category["observable"], 1);
        assert_eq!(summary.by_category[UNCLASSIFIED], 1);
        assert_eq!(summary.by_type["x-test"], 1);
        assert_eq!(summary.by_relation[REFERS_TO], 2);
        assert_eq!(summary.by_relation["uses"], 1);
    }

    #[test]
    fn test_empty() {
        let summary = GraphSummary::from_parts(std::iter::empty(), &[]);
        assert_eq!(summary, GraphSummary::default());
    }
}

//! Type-safe ID wrapper for graph nodes

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Type-safe wrapper for STIX object ids used as node keys
///
/// Format: `<type>--<uuid>` (e.g., "malware--d1c612bc-146f-4b65-b7b0-9a54a14150a4").
/// Edges may reference ids that are not (yet) in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Declared type portion before the `--` separator
    pub fn object_type(&self) -> Option<&str> {
        self.0.split_once("--").map(|(object_type, _)| object_type)
    }

    /// UUID portion after the `--` separator
    pub fn uuid(&self) -> Option<&str> {
        self.0.split_once("--").map(|(_, uuid)| uuid)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by NodeId be queried with &str
impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_parts() {
        let id = NodeId::new("threat-actor--9a8a0d25-7636-429b-a99e-b2a73cd0f11f");
        assert_eq!(id.object_type(), Some("threat-actor"));
        assert_eq!(id.uuid(), Some("9a8a0d25-7636-429b-a99e-b2a73cd0f11f"));
    }

    #[test]
    fn test_node_id_without_separator() {
        let id = NodeId::new("dangling");
        assert_eq!(id.object_type(), None);
        assert_eq!(id.uuid(), None);
    }

    #[test]
    fn test_node_id_display() {
        let id = NodeId::new("tool--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f");
        assert_eq!(format!("{}", id), "tool--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f");
    }

    #[test]
    fn test_transparent_serialization() {
        let id = NodeId::new("malware--1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"malware--1\"");
    }
}

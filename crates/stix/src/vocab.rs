//! Fixed STIX 2.1 vocabularies
//!
//! Domain object and cyber-observable type names, plus the four TLP marking
//! definitions published with the STIX 2.1 standard.

use crate::StixObject;
use serde_json::{json, Map, Value};

/// STIX Domain Object type names
pub const DOMAIN_OBJECT_TYPES: [&str; 18] = [
    "attack-pattern",
    "campaign",
    "course-of-action",
    "grouping",
    "identity",
    "indicator",
    "infrastructure",
    "intrusion-set",
    "location",
    "malware",
    "malware-analysis",
    "note",
    "observed-data",
    "opinion",
    "report",
    "threat-actor",
    "tool",
    "vulnerability",
];

/// STIX Cyber-observable Object type names
pub const OBSERVABLE_TYPES: [&str; 18] = [
    "artifact",
    "autonomous-system",
    "directory",
    "domain-name",
    "email-addr",
    "email-message",
    "file",
    "ipv4-addr",
    "ipv6-addr",
    "mac-addr",
    "mutex",
    "network-traffic",
    "process",
    "software",
    "url",
    "user-account",
    "windows-registry-key",
    "x509-certificate",
];

/// Creation timestamp shared by all four TLP marking definitions
const TLP_CREATED: &str = "2017-01-20T00:00:00.000Z";

/// Traffic Light Protocol level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TlpLevel {
    White,
    Green,
    Amber,
    Red,
}

impl TlpLevel {
    pub const ALL: [TlpLevel; 4] = [
        TlpLevel::White,
        TlpLevel::Green,
        TlpLevel::Amber,
        TlpLevel::Red,
    ];

    /// Well-known marking-definition id for this level
    pub fn marking_id(self) -> &'static str {
        match self {
            TlpLevel::White => "marking-definition--613f2e26-407d-48c7-9eca-b8e91df99dc9",
            TlpLevel::Green => "marking-definition--34098fce-860f-48ae-8e50-ebd3cc5e41da",
            TlpLevel::Amber => "marking-definition--f88d31f6-486f-44da-b317-01333bde0b82",
            TlpLevel::Red => "marking-definition--5e57c739-391a-4eb3-b6be-7d15ca92d5ed",
        }
    }

    /// Look up a level by its marking-definition id
    pub fn from_marking_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.marking_id() == id)
    }

    /// Lowercase colour name used inside the definition ("red", "amber", ...)
    pub fn color(self) -> &'static str {
        match self {
            TlpLevel::White => "white",
            TlpLevel::Green => "green",
            TlpLevel::Amber => "amber",
            TlpLevel::Red => "red",
        }
    }

    /// Display name of the marking ("TLP:RED")
    pub fn name(self) -> String {
        format!("TLP:{}", self.color().to_uppercase())
    }

    /// The full marking-definition object for this level
    pub fn definition(self) -> StixObject {
        let mut properties = Map::new();
        properties.insert("spec_version".to_string(), json!("2.1"));
        properties.insert("created".to_string(), json!(TLP_CREATED));
        properties.insert("definition_type".to_string(), json!("tlp"));
        properties.insert("name".to_string(), Value::String(self.name()));
        properties.insert("definition".to_string(), json!({ "tlp": self.color() }));

        StixObject {
            id: self.marking_id().to_string(),
            object_type: "marking-definition".to_string(),
            properties,
        }
    }
}

//! Canonical object representation and ingestion
//!
//! All accepted input forms (typed values, JSON strings, parsed JSON values)
//! are converted into [`StixObject`] at this boundary so downstream code never
//! branches on input shape.

use crate::{Error, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single STIX object
///
/// `id` and `type` are lifted out of the property map; every other property is
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StixObject {
    /// Globally unique identifier (`<type>--<uuid>`)
    pub id: String,

    /// Declared type (e.g. "malware", "x-custom-thing")
    #[serde(rename = "type")]
    pub object_type: String,

    /// Remaining properties
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl StixObject {
    /// Build an object from a parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidShape(format!(
                    "expected a JSON object, found {}",
                    value_kind(&other)
                )))
            }
        };

        let object_type = match map.remove("type") {
            Some(Value::String(t)) if !t.is_empty() => t,
            _ => {
                return Err(Error::InvalidShape(
                    "object has no declared type".to_string(),
                ))
            }
        };

        let id = match map.remove("id") {
            Some(Value::String(id)) => id,
            _ => {
                return Err(Error::MissingField {
                    field: "id",
                    object_type,
                })
            }
        };

        let valid_id = id
            .strip_prefix(object_type.as_str())
            .and_then(|rest| rest.strip_prefix("--"))
            .is_some_and(|suffix| !suffix.is_empty());
        if !valid_id {
            return Err(Error::InvalidId { id, object_type });
        }

        Ok(Self {
            id,
            object_type,
            properties: map,
        })
    }

    /// Parse an object from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Get a property by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        match key {
            "id" | "type" => None,
            _ => self.properties.get(key),
        }
    }

    /// Get a string property by name
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn is_relationship(&self) -> bool {
        self.object_type == "relationship"
    }

    pub fn is_bundle(&self) -> bool {
        self.object_type == "bundle"
    }

    /// Ids listed in `object_refs` (reports, groupings, notes, ...)
    pub fn object_refs(&self) -> Vec<&str> {
        string_array(self.properties.get("object_refs"))
    }

    /// Ids listed in `object_marking_refs`
    pub fn object_marking_refs(&self) -> Vec<&str> {
        string_array(self.properties.get("object_marking_refs"))
    }

    /// `marking_ref` of every entry in `granular_markings`
    pub fn granular_marking_refs(&self) -> Vec<&str> {
        match self.properties.get("granular_markings") {
            Some(Value::Array(markings)) => markings
                .iter()
                .filter_map(|m| m.get("marking_ref").and_then(Value::as_str))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Full property map including `id` and `type`
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.properties.clone();
        map.insert("id".to_string(), Value::String(self.id.clone()));
        map.insert("type".to_string(), Value::String(self.object_type.clone()));
        map
    }

    /// Pretty-printed JSON serialization
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_map())?)
    }
}

/// A STIX Relationship Object
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub id: String,
    pub relationship_type: String,
    pub source_ref: String,
    pub target_ref: String,
    /// Remaining properties (timestamps, description, ...)
    pub properties: Map<String, Value>,
}

impl Relationship {
    /// Create a new relationship with a fresh id and current timestamps
    pub fn new(
        relationship_type: impl Into<String>,
        source_ref: impl Into<String>,
        target_ref: impl Into<String>,
    ) -> Self {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut properties = Map::new();
        properties.insert("spec_version".to_string(), Value::from("2.1"));
        properties.insert("created".to_string(), Value::String(now.clone()));
        properties.insert("modified".to_string(), Value::String(now));

        Self {
            id: format!("relationship--{}", Uuid::new_v4()),
            relationship_type: relationship_type.into(),
            source_ref: source_ref.into(),
            target_ref: target_ref.into(),
            properties,
        }
    }

    /// Interpret a generic object as a relationship
    pub fn from_object(object: StixObject) -> Result<Self> {
        if !object.is_relationship() {
            return Err(Error::InvalidShape(format!(
                "expected a relationship, found {}",
                object.object_type
            )));
        }

        let StixObject {
            id,
            object_type,
            mut properties,
        } = object;

        let mut take = |field: &'static str| match properties.remove(field) {
            Some(Value::String(s)) => Ok(s),
            _ => Err(Error::MissingField {
                field,
                object_type: object_type.clone(),
            }),
        };

        let relationship_type = take("relationship_type")?;
        let source_ref = take("source_ref")?;
        let target_ref = take("target_ref")?;

        Ok(Self {
            id,
            relationship_type,
            source_ref,
            target_ref,
            properties,
        })
    }

    pub fn from_input(input: impl Into<StixInput>) -> Result<Self> {
        match input.into() {
            StixInput::Relationship(relationship) => Ok(relationship),
            other => Self::from_object(other.into_object()?),
        }
    }

    pub fn into_object(self) -> StixObject {
        let mut properties = self.properties;
        properties.insert(
            "relationship_type".to_string(),
            Value::String(self.relationship_type),
        );
        properties.insert("source_ref".to_string(), Value::String(self.source_ref));
        properties.insert("target_ref".to_string(), Value::String(self.target_ref));

        StixObject {
            id: self.id,
            object_type: "relationship".to_string(),
            properties,
        }
    }
}

/// An ordered collection of STIX objects
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub id: String,
    pub objects: Vec<StixObject>,
}

impl Bundle {
    /// Create a bundle with a fresh id
    pub fn new(objects: Vec<StixObject>) -> Self {
        Self {
            id: format!("bundle--{}", Uuid::new_v4()),
            objects,
        }
    }

    /// Interpret a generic object as a bundle
    ///
    /// Every contained object is parsed before the bundle is returned.
    pub fn from_object(object: StixObject) -> Result<Self> {
        if !object.is_bundle() {
            return Err(Error::InvalidShape(format!(
                "expected a bundle, found {}",
                object.object_type
            )));
        }

        let StixObject {
            id, mut properties, ..
        } = object;

        let objects = match properties.remove("objects") {
            None => Vec::new(),
            Some(Value::Array(values)) => values
                .into_iter()
                .map(StixObject::from_value)
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(Error::InvalidShape(format!(
                    "bundle objects must be an array, found {}",
                    value_kind(&other)
                )))
            }
        };

        Ok(Self { id, objects })
    }

    pub fn from_input(input: impl Into<StixInput>) -> Result<Self> {
        match input.into() {
            StixInput::Bundle(bundle) => Ok(bundle),
            other => Self::from_object(other.into_object()?),
        }
    }

    pub fn into_object(self) -> StixObject {
        let mut properties = Map::new();
        properties.insert(
            "objects".to_string(),
            Value::Array(
                self.objects
                    .into_iter()
                    .map(|o| Value::Object(o.to_map()))
                    .collect(),
            ),
        );
        StixObject {
            id: self.id,
            object_type: "bundle".to_string(),
            properties,
        }
    }
}

/// Any of the accepted input forms
#[derive(Debug, Clone)]
pub enum StixInput {
    Object(StixObject),
    Relationship(Relationship),
    Bundle(Bundle),
    /// JSON-encoded text
    Json(String),
    /// Already-parsed JSON value
    Value(Value),
}

impl StixInput {
    /// Convert into the canonical object representation
    pub fn into_object(self) -> Result<StixObject> {
        match self {
            StixInput::Object(object) => Ok(object),
            StixInput::Relationship(relationship) => Ok(relationship.into_object()),
            StixInput::Bundle(bundle) => Ok(bundle.into_object()),
            StixInput::Json(json) => StixObject::from_json(&json),
            StixInput::Value(value) => StixObject::from_value(value),
        }
    }
}

impl From<StixObject> for StixInput {
    fn from(object: StixObject) -> Self {
        StixInput::Object(object)
    }
}

impl From<Relationship> for StixInput {
    fn from(relationship: Relationship) -> Self {
        StixInput::Relationship(relationship)
    }
}

impl From<Bundle> for StixInput {
    fn from(bundle: Bundle) -> Self {
        StixInput::Bundle(bundle)
    }
}

impl From<String> for StixInput {
    fn from(json: String) -> Self {
        StixInput::Json(json)
    }
}

impl From<&str> for StixInput {
    fn from(json: &str) -> Self {
        StixInput::Json(json.to_string())
    }
}

impl From<Value> for StixInput {
    fn from(value: Value) -> Self {
        StixInput::Value(value)
    }
}

impl From<Map<String, Value>> for StixInput {
    fn from(map: Map<String, Value>) -> Self {
        StixInput::Value(Value::Object(map))
    }
}

fn string_array(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Type classification
//!
//! Maps a declared STIX type to the category used for icon lookup.

use crate::vocab::{TlpLevel, DOMAIN_OBJECT_TYPES, OBSERVABLE_TYPES};
use crate::StixObject;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a STIX object
///
/// Unrecognized types (including custom `x-` types) have no category and are
/// represented as `None` by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "sdo")]
    DomainObject,
    #[serde(rename = "observable")]
    Observable,
    #[serde(rename = "tlp-white")]
    TlpWhite,
    #[serde(rename = "tlp-green")]
    TlpGreen,
    #[serde(rename = "tlp-amber")]
    TlpAmber,
    #[serde(rename = "tlp-red")]
    TlpRed,
    #[serde(rename = "marking-definition")]
    MarkingDefinition,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::DomainObject => "sdo",
            Category::Observable => "observable",
            Category::TlpWhite => "tlp-white",
            Category::TlpGreen => "tlp-green",
            Category::TlpAmber => "tlp-amber",
            Category::TlpRed => "tlp-red",
            Category::MarkingDefinition => "marking-definition",
        }
    }

    /// True for TLP labels and generic marking definitions
    pub fn is_marking(self) -> bool {
        !matches!(self, Category::DomainObject | Category::Observable)
    }
}

impl From<TlpLevel> for Category {
    fn from(level: TlpLevel) -> Self {
        match level {
            TlpLevel::White => Category::TlpWhite,
            TlpLevel::Green => Category::TlpGreen,
            TlpLevel::Amber => Category::TlpAmber,
            TlpLevel::Red => Category::TlpRed,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a parsed object
pub fn classify(object: &StixObject) -> Option<Category> {
    classify_type(&object.object_type, &object.id)
}

/// Classify by declared type and id
///
/// The id only matters for marking definitions, where the four well-known
/// TLP ids map to their own labels.
pub fn classify_type(object_type: &str, id: &str) -> Option<Category> {
    if DOMAIN_OBJECT_TYPES.contains(&object_type) {
        return Some(Category::DomainObject);
    }
    if OBSERVABLE_TYPES.contains(&object_type) {
        return Some(Category::Observable);
    }
    if object_type == "marking-definition" {
        return Some(
            TlpLevel::from_marking_id(id)
                .map(Category::from)
                .unwrap_or(Category::MarkingDefinition),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_objects() {
        for object_type in DOMAIN_OBJECT_TYPES {
            let id = format!("{object_type}--9a8a0d25-7636-429b-a99e-b2a73cd0f11f");
            assert_eq!(classify_type(object_type, &id), Some(Category::DomainObject));
        }
    }

    #[test]
    fn test_observables() {
        assert_eq!(
            classify_type("ipv4-addr", "ipv4-addr--ff26c055-6336-5bc5-b98d-13d6226742dd"),
            Some(Category::Observable)
        );
        assert_eq!(
            classify_type("file", "file--e277603e-1060-5ad4-9937-c26c97f1ca68"),
            Some(Category::Observable)
        );
    }

    #[test]
    fn test_tlp_markings() {
        assert_eq!(
            classify_type("marking-definition", TlpLevel::Red.marking_id()),
            Some(Category::TlpRed)
        );
        assert_eq!(
            classify_type("marking-definition", TlpLevel::White.marking_id()),
            Some(Category::TlpWhite)
        );
        assert_eq!(
            classify(&TlpLevel::Amber.definition()),
            Some(Category::TlpAmber)
        );
    }

    #[test]
    fn test_generic_marking() {
        assert_eq!(
            classify_type(
                "marking-definition",
                "marking-definition--34098fce-860f-48ae-8e50-000000000000"
            ),
            Some(Category::MarkingDefinition)
        );
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(
            classify_type("x-test", "x-test--45d71d3d-52bd-4300-815a-78c434d4d50c"),
            None
        );
        assert_eq!(classify_type("relationship", "relationship--1"), None);
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(serde_json::to_string(&Category::DomainObject).unwrap(), "\"sdo\"");
        assert_eq!(serde_json::to_string(&Category::TlpRed).unwrap(), "\"tlp-red\"");
        let none: Option<Category> = None;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
    }

    #[test]
    fn test_is_marking() {
        assert!(!Category::DomainObject.is_marking());
        assert!(!Category::Observable.is_marking());
        assert!(Category::TlpGreen.is_marking());
        assert!(Category::MarkingDefinition.is_marking());
    }
}

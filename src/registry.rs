//! Custom STIX type registry
//!
//! User-declared types (typically `x-` prefixed) are unknown to the classifier.
//! Registering one assigns it an icon or a colour and the property used as
//! its node label.

use crate::icons::image_data_uri;
use crate::{Result, StixViewError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

lazy_static! {
    /// Hex RGB colour, uppercase digits only
    static ref HEX_COLOR: Regex = Regex::new("^#[0-9A-F]{6}$").expect("valid colour pattern");
}

fn default_label_field() -> String {
    "name".to_string()
}

/// Registration request for a custom type
///
/// This is also the shape of a `custom_types` entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTypeSpec {
    /// Type name as it appears in the object's `type` property
    #[serde(rename = "type")]
    pub name: String,

    /// URL or local path of the node icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Node colour in hex RGB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Property used as the node label
    #[serde(default = "default_label_field")]
    pub label_field: String,
}

impl CustomTypeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            color: None,
            label_field: default_label_field(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_label_field(mut self, field: impl Into<String>) -> Self {
        self.label_field = field.into();
        self
    }
}

/// Visual assigned to a custom type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomVisual {
    /// URL or `data:` URI
    Image(String),
    /// Hex RGB colour
    Color(String),
    /// Registered without a visual; resolving it is an error
    Unset,
}

/// A registered custom type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTypeDescriptor {
    pub visual: CustomVisual,
    pub label_field: String,
}

/// In-process registry of custom types, owned by one graph
#[derive(Debug, Clone, Default)]
pub struct CustomTypeRegistry {
    types: HashMap<String, CustomTypeDescriptor>,
}

impl CustomTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom type
    ///
    /// # Errors
    /// - `DuplicateType` if the name is already registered
    /// - `ConflictingVisual` if both an icon and a colour are given
    /// - `InvalidIcon` if the icon is neither an http(s) URL nor a readable image
    /// - `InvalidColor` if the colour is not `#RRGGBB` with uppercase digits
    pub fn register(&mut self, spec: CustomTypeSpec) -> Result<()> {
        if self.types.contains_key(&spec.name) {
            return Err(StixViewError::DuplicateType(spec.name));
        }

        let visual = match (spec.icon, spec.color) {
            (Some(_), Some(_)) => return Err(StixViewError::ConflictingVisual(spec.name)),
            (Some(icon), None) => CustomVisual::Image(load_icon(&spec.name, &icon)?),
            (None, Some(color)) => {
                if !HEX_COLOR.is_match(&color) {
                    return Err(StixViewError::InvalidColor {
                        custom_type: spec.name,
                        color,
                    });
                }
                CustomVisual::Color(color)
            }
            (None, None) => {
                tracing::debug!(custom_type = %spec.name, "Custom type registered without a visual");
                CustomVisual::Unset
            }
        };

        tracing::debug!(custom_type = %spec.name, label_field = %spec.label_field, "Registered custom type");
        self.types.insert(
            spec.name,
            CustomTypeDescriptor {
                visual,
                label_field: spec.label_field,
            },
        );
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CustomTypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered type names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Check whether a colour matches the accepted hex RGB pattern
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

fn load_icon(custom_type: &str, icon: &str) -> Result<String> {
    let invalid = |reason: String| StixViewError::InvalidIcon {
        custom_type: custom_type.to_string(),
        reason,
    };

    if icon.starts_with("data:image/") {
        return Ok(icon.to_string());
    }

    if icon.starts_with("http") {
        let url = Url::parse(icon).map_err(|e| invalid(format!("malformed URL: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported URL scheme '{}'", url.scheme())));
        }
        return Ok(icon.to_string());
    }

    image_data_uri(icon).map_err(|e| invalid(format!("cannot load {}: {}", icon, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_register_color() {
        let mut registry = CustomTypeRegistry::new();
        registry
            .register(CustomTypeSpec::new("x-test").with_color("#ABCDEF"))
            .unwrap();

        let descriptor = registry.get("x-test").unwrap();
        assert_eq!(descriptor.visual, CustomVisual::Color("#ABCDEF".to_string()));
        assert_eq!(descriptor.label_field, "name");
    }

    #[test]
    fn test_register_duplicate() {
        let mut registry = CustomTypeRegistry::new();
        registry
            .register(CustomTypeSpec::new("x-test").with_color("#FF0000"))
            .unwrap();

        let err = registry
            .register(CustomTypeSpec::new("x-test").with_color("#FF0000"))
            .unwrap_err();
        assert!(matches!(err, StixViewError::DuplicateType(name) if name == "x-test"));
    }

    #[test]
    fn test_invalid_colors() {
        let mut registry = CustomTypeRegistry::new();
        for color in ["test", "notahex", "#FFF", "FF0000", "#FF0000AA"] {
            let err = registry
                .register(CustomTypeSpec::new("x-test").with_color(color))
                .unwrap_err();
            assert!(matches!(err, StixViewError::InvalidColor { .. }), "{color}");
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lowercase_hex_is_rejected() {
        assert!(!is_hex_color("#abcdef"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(is_hex_color("#09AF00"));
    }

    #[test]
    fn test_icon_and_color_conflict() {
        let mut registry = CustomTypeRegistry::new();
        let err = registry
            .register(
                CustomTypeSpec::new("x-test")
                    .with_icon("https://example.com/icon.png")
                    .with_color("#ABCDEF"),
            )
            .unwrap_err();
        assert!(matches!(err, StixViewError::ConflictingVisual(_)));
        assert!(!registry.contains("x-test"));
    }

    #[test]
    fn test_icon_url_kept_verbatim() {
        let url = "https://uxwing.com/wp-content/themes/uxwing/download/web-app-development/bug-icon.png";
        let mut registry = CustomTypeRegistry::new();
        registry
            .register(CustomTypeSpec::new("x-test").with_icon(url))
            .unwrap();

        assert_eq!(
            registry.get("x-test").unwrap().visual,
            CustomVisual::Image(url.to_string())
        );
    }

    #[test]
    fn test_icon_local_path_is_encoded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test-icon.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();

        let mut registry = CustomTypeRegistry::new();
        registry
            .register(CustomTypeSpec::new("x-test").with_icon(path.to_string_lossy()))
            .unwrap();

        match &registry.get("x-test").unwrap().visual {
            CustomVisual::Image(uri) => assert!(uri.starts_with("data:image/png;base64,")),
            other => panic!("unexpected visual {:?}", other),
        }
    }

    #[test]
    fn test_invalid_icons() {
        let mut registry = CustomTypeRegistry::new();

        let err = registry
            .register(CustomTypeSpec::new("x-test").with_icon("/nonexistent/icon.png"))
            .unwrap_err();
        assert!(matches!(err, StixViewError::InvalidIcon { .. }));

        let err = registry
            .register(CustomTypeSpec::new("x-test").with_icon("http://"))
            .unwrap_err();
        assert!(matches!(err, StixViewError::InvalidIcon { .. }));
    }

    #[test]
    fn test_register_without_visual() {
        let mut registry = CustomTypeRegistry::new();
        registry.register(CustomTypeSpec::new("x-test")).unwrap();
        assert_eq!(registry.get("x-test").unwrap().visual, CustomVisual::Unset);
    }

    #[test]
    fn test_label_field_and_names() {
        let mut registry = CustomTypeRegistry::new();
        registry
            .register(
                CustomTypeSpec::new("x-zeta")
                    .with_color("#000000")
                    .with_label_field("title"),
            )
            .unwrap();
        registry
            .register(CustomTypeSpec::new("x-alpha").with_color("#FFFFFF"))
            .unwrap();

        assert_eq!(registry.get("x-zeta").unwrap().label_field, "title");
        assert_eq!(registry.names(), vec!["x-alpha", "x-zeta"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_spec_from_yaml() {
        let spec: CustomTypeSpec =
            serde_yaml::from_str("type: x-test\ncolor: \"#ABCDEF\"\n").unwrap();
        assert_eq!(spec.name, "x-test");
        assert_eq!(spec.label_field, "name");
        assert!(spec.icon.is_none());
    }
}

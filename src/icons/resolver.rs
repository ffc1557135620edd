//! Icon resolution
//!
//! Asset layout under the icons root:
//! - `<category>/<type>/<style>.png` for domain objects and observables
//! - `generic/<label>-<style>.png` for marking definitions
//! - `custom/<style>.png` as the placeholder for unregistered types

use super::{image_data_uri, IconStyle};
use crate::diagnostic::Diagnostic;
use crate::registry::{CustomTypeRegistry, CustomVisual};
use crate::{Result, StixViewError};
use stix::Category;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Colour used when a known category has no icon asset
pub const FALLBACK_COLOR: &str = "#FF0000";

/// Image or colour of a rendered node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    /// URL or `data:` URI, drawn with the `image` shape
    Image(String),
    /// Hex colour, drawn with the `dot` shape
    Color(String),
}

impl Visual {
    pub fn shape(&self) -> &'static str {
        match self {
            Visual::Image(_) => "image",
            Visual::Color(_) => "dot",
        }
    }
}

/// Outcome of resolving one node's visual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub visual: Visual,
    pub diagnostic: Option<Diagnostic>,
}

impl Resolved {
    fn clean(visual: Visual) -> Self {
        Self {
            visual,
            diagnostic: None,
        }
    }
}

/// Resolves node visuals against an icon directory
///
/// Encoded icons are cached for the lifetime of the resolver, so one resolver
/// per render keeps repeated types cheap.
#[derive(Debug)]
pub struct IconResolver {
    root: PathBuf,
    cache: HashMap<PathBuf, String>,
}

impl IconResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// Asset path for a classified object
    pub fn asset_path(&self, category: Category, object_type: &str, style: IconStyle) -> PathBuf {
        if category.is_marking() {
            self.root
                .join("generic")
                .join(format!("{}-{}.png", category, style))
        } else {
            self.root
                .join(category.as_str())
                .join(object_type)
                .join(format!("{}.png", style))
        }
    }

    /// Placeholder asset for unregistered custom types
    pub fn placeholder_path(&self, style: IconStyle) -> PathBuf {
        self.root.join("custom").join(format!("{}.png", style))
    }

    /// Resolve the visual of one node
    ///
    /// # Errors
    /// `MissingVisual` when the type is registered without an icon or colour.
    pub fn resolve(
        &mut self,
        category: Option<Category>,
        object_type: &str,
        id: &str,
        style: IconStyle,
        registry: &CustomTypeRegistry,
    ) -> Result<Resolved> {
        let Some(category) = category else {
            return self.resolve_custom(object_type, id, style, registry);
        };

        let path = self.asset_path(category, object_type, style);
        match self.load(&path) {
            Some(uri) => Ok(Resolved::clean(Visual::Image(uri))),
            None => Ok(Resolved {
                visual: Visual::Color(FALLBACK_COLOR.to_string()),
                diagnostic: Some(
                    Diagnostic::MissingIcon {
                        object_type: object_type.to_string(),
                        path,
                    }
                    .emit(),
                ),
            }),
        }
    }

    fn resolve_custom(
        &mut self,
        object_type: &str,
        id: &str,
        style: IconStyle,
        registry: &CustomTypeRegistry,
    ) -> Result<Resolved> {
        if let Some(descriptor) = registry.get(object_type) {
            return match &descriptor.visual {
                CustomVisual::Image(image) => Ok(Resolved::clean(Visual::Image(image.clone()))),
                CustomVisual::Color(color) => Ok(Resolved::clean(Visual::Color(color.clone()))),
                CustomVisual::Unset => Err(StixViewError::MissingVisual(object_type.to_string())),
            };
        }

        let diagnostic = Diagnostic::UnknownType {
            object_type: object_type.to_string(),
            id: id.to_string(),
        }
        .emit();

        let placeholder = self.placeholder_path(style);
        let visual = match self.load(&placeholder) {
            Some(uri) => Visual::Image(uri),
            None => {
                tracing::debug!(path = %placeholder.display(), "Custom placeholder icon missing");
                Visual::Color(FALLBACK_COLOR.to_string())
            }
        };

        Ok(Resolved {
            visual,
            diagnostic: Some(diagnostic),
        })
    }

    fn load(&mut self, path: &Path) -> Option<String> {
        if let Some(uri) = self.cache.get(path) {
            return Some(uri.clone());
        }
        if !path.is_file() {
            return None;
        }
        match image_data_uri(path) {
            Ok(uri) => {
                self.cache.insert(path.to_path_buf(), uri.clone());
                Some(uri)
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Failed to load icon");
                None
            }
        }
    }
}

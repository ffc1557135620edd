//! STIXView configuration file handling
//!
//! Loads and manages the ~/.config/stixview/config.yaml file.

use crate::registry::CustomTypeSpec;
use crate::render::{ButtonPanel, PhysicsConfig, RenderOptions};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Graph presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Height of the graph area (CSS length)
    #[serde(default = "default_height")]
    pub height: String,

    /// Width of the graph area (CSS length)
    #[serde(default = "default_width")]
    pub width: String,

    /// Default icon style (square-flat, square-dark, square-lite,
    /// noback-dark, noback-flat, round-flat)
    #[serde(default = "default_style")]
    pub style: String,

    /// Draw arrow heads on edges
    #[serde(default = "default_directed")]
    pub directed: bool,

    /// Visual weight of every edge
    #[serde(default = "default_edge_weight")]
    pub edge_weight: f64,
}

fn default_height() -> String {
    "750px".to_string()
}

fn default_width() -> String {
    "100%".to_string()
}

fn default_style() -> String {
    "square-flat".to_string()
}

fn default_directed() -> bool {
    true
}

fn default_edge_weight() -> f64 {
    0.4
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
            style: default_style(),
            directed: default_directed(),
            edge_weight: default_edge_weight(),
        }
    }
}

/// STIXView configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StixViewConfig {
    /// Directory holding the node icon assets
    #[serde(default = "default_icons_root")]
    pub icons_root: PathBuf,

    /// Graph presentation settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Layout physics
    #[serde(default)]
    pub physics: PhysicsConfig,

    /// Configuration panels to show under the graph
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ButtonPanel>,

    /// Custom STIX types registered on every new graph
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_types: Vec<CustomTypeSpec>,
}

fn default_icons_root() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("stixview");
    path.push("icons");
    path
}

impl StixViewConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            icons_root: default_icons_root(),
            graph: GraphConfig::default(),
            physics: PhysicsConfig::default(),
            buttons: Vec::new(),
            custom_types: Vec::new(),
        }
    }

    /// Load configuration from the default path (~/.config/stixview/config.yaml)
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path();
        Self::load(&path)
    }

    /// Load configuration from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(crate::StixViewError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), "Loading STIXView configuration");

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        tracing::debug!(
            icons_root = %config.icons_root.display(),
            style = %config.graph.style,
            custom_types = config.custom_types.len(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load from `path` if given, else from the default path, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                if Self::default_path().exists() {
                    Self::load_default()
                } else {
                    tracing::debug!("No configuration file, using defaults");
                    Ok(Self::new())
                }
            }
        }
    }

    /// Save configuration to the default path
    pub fn save_default(&self) -> Result<()> {
        let path = Self::default_path();
        self.save(&path)
    }

    /// Save configuration to a specific path
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %path.display(), "Saving STIXView configuration");

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;

        Ok(())
    }

    /// Get the default config path (~/.config/stixview/config.yaml)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".config");
        path.push("stixview");
        path.push("config.yaml");
        path
    }

    /// Apply command-line overrides of the icons root and the default style
    ///
    /// Run before validation so the style that will actually be rendered is
    /// the one checked.
    pub fn with_overrides(mut self, icons_root: Option<PathBuf>, style: Option<String>) -> Self {
        if let Some(icons_root) = icons_root {
            self.icons_root = icons_root;
        }
        if let Some(style) = style {
            self.graph.style = style;
        }
        self
    }

    /// Render options derived from the graph, physics and button settings
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            height: self.graph.height.clone(),
            width: self.graph.width.clone(),
            directed: self.graph.directed,
            edge_weight: self.graph.edge_weight,
            physics: self.physics.clone(),
            buttons: self.buttons.clone(),
            ..RenderOptions::default()
        }
    }
}

impl Default for StixViewConfig {
    fn default() -> Self {
        Self::new()
    }
}

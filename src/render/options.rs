//! Render and layout options

use serde::{Deserialize, Serialize};

/// Barnes-Hut physics parameters passed through to the layout engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    #[serde(default = "default_gravity")]
    pub gravity: f64,

    #[serde(default)]
    pub central_gravity: f64,

    #[serde(default = "default_spring_length")]
    pub spring_length: f64,

    #[serde(default = "default_damping")]
    pub damping: f64,

    #[serde(default)]
    pub overlap: f64,
}

fn default_gravity() -> f64 {
    -5000.0
}

fn default_spring_length() -> f64 {
    50.0
}

fn default_damping() -> f64 {
    0.9
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            central_gravity: 0.0,
            spring_length: default_spring_length(),
            damping: default_damping(),
            overlap: 0.0,
        }
    }
}

/// Interactive configuration panels shown under the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPanel {
    Physics,
    Nodes,
    Edges,
}

impl ButtonPanel {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonPanel::Physics => "physics",
            ButtonPanel::Nodes => "nodes",
            ButtonPanel::Edges => "edges",
        }
    }
}

impl std::str::FromStr for ButtonPanel {
    type Err = crate::StixViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "physics" => Ok(ButtonPanel::Physics),
            "nodes" => Ok(ButtonPanel::Nodes),
            "edges" => Ok(ButtonPanel::Edges),
            other => Err(crate::StixViewError::InvalidInput(format!(
                "unknown button panel '{}' (expected physics, nodes or edges)",
                other
            ))),
        }
    }
}

/// Kind of document to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderTarget {
    /// Complete HTML page
    #[default]
    Standalone,
    /// HTML fragment for embedding in another page or a notebook cell
    Embedded,
}

/// Everything a render needs besides the graph and the icon style
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub height: String,
    pub width: String,
    pub directed: bool,
    pub edge_weight: f64,
    pub physics: PhysicsConfig,
    pub buttons: Vec<ButtonPanel>,
    pub target: RenderTarget,
    /// DOM id of the graph container
    pub container_id: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            height: "750px".to_string(),
            width: "100%".to_string(),
            directed: true,
            edge_weight: 0.4,
            physics: PhysicsConfig::default(),
            buttons: Vec::new(),
            target: RenderTarget::Standalone,
            container_id: "stix-graph".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn embedded(mut self) -> Self {
        self.target = RenderTarget::Embedded;
        self
    }

    pub fn with_buttons(mut self, buttons: impl IntoIterator<Item = ButtonPanel>) -> Self {
        self.buttons = buttons.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_defaults() {
        let physics = PhysicsConfig::default();
        assert_eq!(physics.gravity, -5000.0);
        assert_eq!(physics.central_gravity, 0.0);
        assert_eq!(physics.spring_length, 50.0);
        assert_eq!(physics.damping, 0.9);
        assert_eq!(physics.overlap, 0.0);
    }

    #[test]
    fn test_partial_physics_yaml() {
        let physics: PhysicsConfig = serde_yaml::from_str("damping: 0.5\n").unwrap();
        assert_eq!(physics.damping, 0.5);
        assert_eq!(physics.gravity, -5000.0);
    }

    #[test]
    fn test_button_panel_parse() {
        assert_eq!("nodes".parse::<ButtonPanel>().unwrap(), ButtonPanel::Nodes);
        assert!("layout".parse::<ButtonPanel>().is_err());
    }

    #[test]
    fn test_builder_helpers() {
        let options = RenderOptions::default()
            .embedded()
            .with_buttons([ButtonPanel::Physics, ButtonPanel::Edges]);
        assert_eq!(options.target, RenderTarget::Embedded);
        assert_eq!(options.buttons.len(), 2);
        assert_eq!(options.edge_weight, 0.4);
    }
}

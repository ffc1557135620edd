//! Configuration validation
//!
//! Validates STIXView configuration for correctness:
//! - Icon style is one of the supported literals
//! - Graph and physics values are in range
//! - Custom types are unique and carry a well-formed visual

use super::stixview_config::StixViewConfig;
use crate::icons::IconStyle;
use crate::registry::{is_hex_color, CustomTypeSpec};
use crate::StixViewError;
use std::collections::HashSet;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Custom type the error belongs to, if any
    pub context: Option<String>,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: None,
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref ctx) = self.context {
            write!(f, "[{}] {}: {}", ctx, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a STIXView configuration
pub fn validate_config(config: &StixViewConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.graph.style.parse::<IconStyle>().is_err() {
        let styles: Vec<&str> = IconStyle::ALL.iter().map(|s| s.as_str()).collect();
        errors.push(ValidationError::new(
            "graph.style",
            format!(
                "Invalid style '{}'. Must be one of: {}",
                config.graph.style,
                styles.join(", ")
            ),
        ));
    }

    if config.graph.height.trim().is_empty() {
        errors.push(ValidationError::new("graph.height", "Height cannot be empty"));
    }

    if config.graph.width.trim().is_empty() {
        errors.push(ValidationError::new("graph.width", "Width cannot be empty"));
    }

    if config.graph.edge_weight <= 0.0 {
        errors.push(ValidationError::new(
            "graph.edge_weight",
            "Edge weight must be greater than 0",
        ));
    }

    if !(0.0..=1.0).contains(&config.physics.damping) {
        errors.push(ValidationError::new(
            "physics.damping",
            format!("Damping must be between 0 and 1, got {}", config.physics.damping),
        ));
    }

    if config.physics.spring_length <= 0.0 {
        errors.push(ValidationError::new(
            "physics.spring_length",
            "Spring length must be greater than 0",
        ));
    }

    if !(0.0..=1.0).contains(&config.physics.overlap) {
        errors.push(ValidationError::new(
            "physics.overlap",
            format!("Overlap must be between 0 and 1, got {}", config.physics.overlap),
        ));
    }

    let mut seen_types = HashSet::new();
    for custom_type in &config.custom_types {
        if !seen_types.insert(&custom_type.name) {
            errors.push(ValidationError::new(
                "custom_types",
                format!("Duplicate custom type: {}", custom_type.name),
            ));
        }

        if let Err(mut type_errors) = validate_custom_type(custom_type) {
            errors.append(&mut type_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a single custom type entry
///
/// Icon paths are not checked here; they are loaded when the type is
/// registered on a graph.
fn validate_custom_type(spec: &CustomTypeSpec) -> ValidationResult {
    let mut errors = Vec::new();

    if spec.name.is_empty() {
        errors.push(ValidationError::new("type", "Custom type name cannot be empty"));
    }

    if spec.label_field.is_empty() {
        errors.push(
            ValidationError::new("label_field", "Label field cannot be empty")
                .with_context(&spec.name),
        );
    }

    match (&spec.icon, &spec.color) {
        (Some(_), Some(_)) => errors.push(
            ValidationError::new("icon", "Set either an icon or a color, not both")
                .with_context(&spec.name),
        ),
        (None, Some(color)) if !is_hex_color(color) => errors.push(
            ValidationError::new(
                "color",
                format!("Invalid color '{}', expected hex RGB like #FF0000", color),
            )
            .with_context(&spec.name),
        ),
        (None, None) => tracing::warn!(
            custom_type = %spec.name,
            "Custom type has neither icon nor color; rendering it will fail"
        ),
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate configuration and return a Result
pub fn validate_config_result(config: &StixViewConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        StixViewError::Config(format!(
            "Configuration validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let mut config = StixViewConfig::new();
        config
            .custom_types
            .push(CustomTypeSpec::new("x-test").with_color("#ABCDEF"));

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_style() {
        let mut config = StixViewConfig::new();
        config.graph.style = "test".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "graph.style");
        assert!(errors[0].message.contains("square-flat"));
    }

    #[test]
    fn test_physics_ranges() {
        let mut config = StixViewConfig::new();
        config.physics.damping = 1.5;
        config.physics.spring_length = 0.0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_duplicate_custom_types() {
        let mut config = StixViewConfig::new();
        config
            .custom_types
            .push(CustomTypeSpec::new("x-test").with_color("#ABCDEF"));
        config
            .custom_types
            .push(CustomTypeSpec::new("x-test").with_color("#000000"));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message.contains("Duplicate custom type")));
    }

    #[test]
    fn test_custom_type_visuals() {
        let mut config = StixViewConfig::new();
        config.custom_types.push(
            CustomTypeSpec::new("x-both")
                .with_icon("https://example.com/icon.png")
                .with_color("#ABCDEF"),
        );
        config
            .custom_types
            .push(CustomTypeSpec::new("x-lower").with_color("#abcdef"));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].context.as_deref(), Some("x-both"));
        assert_eq!(errors[1].field, "color");
    }

    #[test]
    fn test_result_wraps_messages() {
        let mut config = StixViewConfig::new();
        config.graph.edge_weight = 0.0;

        let err = validate_config_result(&config).unwrap_err();
        assert!(err.to_string().contains("graph.edge_weight"));
    }
}

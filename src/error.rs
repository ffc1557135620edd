//! Error types for STIXView
//!
//! Defines a comprehensive error enum covering every failure mode of graph
//! building, custom type registration, and rendering.
//! Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Result type alias for STIXView operations
pub type Result<T> = std::result::Result<T, StixViewError>;

/// Comprehensive error type for STIXView operations
#[derive(Error, Debug)]
pub enum StixViewError {
    /// Unparseable input text or value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Wrong kind of STIX content for the operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Custom type registered twice
    #[error("The custom type {0} is already defined")]
    DuplicateType(String),

    /// Custom type icon is neither a URL nor a loadable image
    #[error("Invalid icon for custom type {custom_type}: {reason}")]
    InvalidIcon { custom_type: String, reason: String },

    /// Custom type colour is not hex RGB
    #[error("Invalid color '{color}' for custom type {custom_type}: expected hex RGB like #FF0000")]
    InvalidColor { custom_type: String, color: String },

    /// Custom type given both an icon and a colour
    #[error("Custom type {0} must have either an icon or a color, not both")]
    ConflictingVisual(String),

    /// Custom type registered without any visual, used at render time
    #[error("No image nor color found for the custom type {0}")]
    MissingVisual(String),

    /// Unknown icon style literal
    #[error("Invalid style '{0}'. Select from the following: square-flat, square-dark, square-lite, noback-dark, noback-flat, round-flat")]
    InvalidStyle(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<stix::Error> for StixViewError {
    fn from(err: stix::Error) -> Self {
        match err {
            stix::Error::Parse(msg) => StixViewError::Parse(msg),
            stix::Error::Json(e) => StixViewError::Json(e),
            other => StixViewError::InvalidInput(other.to_string()),
        }
    }
}

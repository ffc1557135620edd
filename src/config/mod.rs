//! Configuration system
//!
//! Loads ~/.config/stixview/config.yaml with support for:
//! - Icon asset directory
//! - Graph size, default icon style and edge weight
//! - Layout physics and configuration panels
//! - Custom STIX types registered on every graph

mod stixview_config;
pub mod validation;

pub use stixview_config::{GraphConfig, StixViewConfig};
pub use validation::{validate_config, validate_config_result, ValidationError};

//! Node icons
//!
//! Icon styles, on-disk asset layout, and resolution of a node's visual from
//! its category, type, and the custom type registry.

mod encode;
mod resolver;
mod visual_style;

pub use encode::image_data_uri;
pub use resolver::{IconResolver, Resolved, Visual, FALLBACK_COLOR};
pub use visual_style::IconStyle;

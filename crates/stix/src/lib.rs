//! STIX 2.1 object model for graph building
//!
//! A small, schema-light view of STIX 2.1 content: every object is kept as its
//! `id`, its declared `type`, and the remaining properties as raw JSON. This is
//! enough to classify objects and derive graph edges without modelling every
//! STIX property.
//!
//! # Example
//!
//! ```
//! use stix::{classify, Bundle, Category, StixInput};
//!
//! let bundle = Bundle::from_input(StixInput::from(
//!     r#"{
//!         "type": "bundle",
//!         "id": "bundle--5d0092c5-5f74-4287-9642-33f4c354e56d",
//!         "objects": [{
//!             "type": "malware",
//!             "id": "malware--d1c612bc-146f-4b65-b7b0-9a54a14150a4",
//!             "name": "Poison Ivy",
//!             "is_family": true
//!         }]
//!     }"#,
//! ))?;
//!
//! assert_eq!(classify(&bundle.objects[0]), Some(Category::DomainObject));
//! # Ok::<(), stix::Error>(())
//! ```

mod classify;
mod object;
mod vocab;

pub use classify::{classify, classify_type, Category};
pub use object::{Bundle, Relationship, StixInput, StixObject};
pub use vocab::{TlpLevel, DOMAIN_OBJECT_TYPES, OBSERVABLE_TYPES};

use thiserror::Error;

/// Errors raised while ingesting STIX content
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse STIX JSON: {0}")]
    Parse(String),

    #[error("Invalid STIX data: {0}")]
    InvalidShape(String),

    #[error("Missing required property '{field}' on {object_type}")]
    MissingField {
        field: &'static str,
        object_type: String,
    },

    #[error("Identifier '{id}' does not match declared type '{object_type}'")]
    InvalidId { id: String, object_type: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for STIX operations
pub type Result<T> = std::result::Result<T, Error>;

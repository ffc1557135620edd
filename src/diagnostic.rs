//! Non-fatal diagnostics
//!
//! Raised when the graph can still be built or rendered but something was
//! degraded to a placeholder. Each diagnostic is logged with `tracing::warn!`
//! where it is raised and also handed back to the caller.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Unrecognized type with no custom type registration
    UnknownType { object_type: String, id: String },

    /// Icon asset for a known category is missing on disk
    MissingIcon { object_type: String, path: PathBuf },

    /// Marking reference that is not one of the well-known TLP definitions
    UnknownMarking { marking_ref: String, object_id: String },
}

impl Diagnostic {
    pub(crate) fn emit(self) -> Self {
        match &self {
            Diagnostic::UnknownType { object_type, id } => {
                tracing::warn!(object_type = %object_type, id = %id, "{}", self)
            }
            Diagnostic::MissingIcon { object_type, path } => {
                tracing::warn!(object_type = %object_type, path = %path.display(), "{}", self)
            }
            Diagnostic::UnknownMarking {
                marking_ref,
                object_id,
            } => tracing::warn!(marking_ref = %marking_ref, object_id = %object_id, "{}", self),
        }
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownType { object_type, .. } => {
                write!(f, "STIX type {} is not defined", object_type)
            }
            Diagnostic::MissingIcon { path, .. } => {
                write!(f, "No file found at {}", path.display())
            }
            Diagnostic::UnknownMarking { marking_ref, .. } => {
                write!(f, "Marking {} is not a known TLP definition", marking_ref)
            }
        }
    }
}

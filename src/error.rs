//! Fatal error conditions of a generation run.
//!
//! Anchor collisions are not errors (they are disambiguated in place), and
//! loading failures live at the edges as `anyhow` errors. Everything here
//! aborts the run with no partial output.

use crate::site::types::EntityKind;

/// Errors raised by the cross-reference and indexing engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A cross-reference field names an entity absent from the target list.
    #[error("{referenced_by:?} references unknown {kind} {name:?}")]
    UnresolvedReference {
        kind: EntityKind,
        name: String,
        referenced_by: String,
    },

    /// A field has no display-name / pluralization mapping.
    #[error("\"{0}\" not a known singular!")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;

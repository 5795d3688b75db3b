//! MeshError: Unified error type for mesh-viewspots public APIs
//!
//! Mesh construction, validation and JSON loading all report through this
//! type. Classification and ranking are total over a constructed mesh and
//! never produce it.

use crate::topology::ids::{ElementId, NodeId};
use thiserror::Error;

/// Unified error type for mesh-viewspots operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// An element references a node id that is not part of the node list.
    #[error("Element {element} refers to unknown node with id {node}")]
    UnknownNodeReference { element: ElementId, node: NodeId },
    /// A value record references an element id that is not part of the element list.
    #[error("Value refers to unknown element with id {0}")]
    UnknownElementReference(ElementId),
    /// An element has no associated value record.
    #[error("Element {0} has no associated value")]
    MissingValue(ElementId),
    /// Two elements share the same id.
    #[error("Element id {0} occurs more than once")]
    DuplicateElement(ElementId),
    /// The input document does not have the expected top-level shape.
    #[error("The given json does not have the expected structure: {0}")]
    InvalidStructure(String),
    /// The input document could not be parsed.
    #[error("Mesh parse error: {0}")]
    MeshIoParse(String),
    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(String),
    /// An internal consistency check failed.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl From<std::io::Error> for MeshError {
    fn from(e: std::io::Error) -> Self {
        MeshError::Io(e.to_string())
    }
}

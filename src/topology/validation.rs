//! Referential sanity checks for mesh input.
//!
//! These run only when [`MeshOptions::sanity_check`](crate::config::MeshOptions)
//! is set. The first violation found is returned; no partial mesh is built.

use crate::mesh_error::MeshError;
use crate::topology::ids::{ElementId, NodeId};
use crate::topology::mesh::{Element, ElementValue, Node};
use hashbrown::HashSet;

/// Run every referential check: element → node, then value → element.
pub fn validate_references(
    nodes: &[Node],
    elements: &[Element],
    values: &[ElementValue],
) -> Result<(), MeshError> {
    validate_node_references(nodes, elements)?;
    validate_value_references(elements, values)?;
    Ok(())
}

/// Ensure every node id referenced by an element exists in `nodes`.
pub fn validate_node_references(nodes: &[Node], elements: &[Element]) -> Result<(), MeshError> {
    let mut known: HashSet<NodeId> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !known.insert(node.id) {
            log::warn!("Duplicate node id detected: node={}", node.id);
        }
    }
    for element in elements {
        if let Some(&node) = element.nodes.iter().find(|n| !known.contains(*n)) {
            return Err(MeshError::UnknownNodeReference {
                element: element.id,
                node,
            });
        }
    }
    Ok(())
}

/// Ensure every value record targets an element present in `elements`.
pub fn validate_value_references(
    elements: &[Element],
    values: &[ElementValue],
) -> Result<(), MeshError> {
    let known: HashSet<ElementId> = elements.iter().map(|e| e.id).collect();
    match values.iter().find(|v| !known.contains(&v.element_id)) {
        Some(v) => Err(MeshError::UnknownElementReference(v.element_id)),
        None => Ok(()),
    }
}

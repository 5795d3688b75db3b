//! Mesh model: nodes, elements and one scalar value per element.
//!
//! A [`Mesh`] is built once from fully formed node/element/value collections
//! and is read-only afterwards. Elements are joined with their value into
//! [`ValuedElement`]s stored in an arena; every algorithm addresses elements
//! by arena index and resolves ids through [`Mesh::index_of`].
//!
//! Construction is all-or-nothing: either every element has a value (or the
//! [`MissingValuePolicy`] substitutes one) and ids are unique, or an error is
//! returned and no mesh exists.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::config::{MeshOptions, MissingValuePolicy};
use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshError;
use crate::topology::ids::{ElementId, NodeId};
use crate::topology::validation::validate_references;

/// A mesh vertex. Coordinates are carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self { id, x: None, y: None }
    }

    pub fn with_coords(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            x: Some(x),
            y: Some(y),
        }
    }
}

/// A mesh cell given by the ids of the nodes on its boundary.
///
/// Node order carries no meaning for adjacency and any number of nodes is
/// accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub nodes: Vec<NodeId>,
}

impl Element {
    pub fn new(id: ElementId, nodes: impl Into<Vec<NodeId>>) -> Self {
        Self {
            id,
            nodes: nodes.into(),
        }
    }
}

/// Scalar value attached to one element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementValue {
    pub element_id: ElementId,
    pub value: f64,
}

impl ElementValue {
    pub fn new(element_id: ElementId, value: f64) -> Self {
        Self { element_id, value }
    }
}

/// An element joined with its value.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuedElement {
    pub id: ElementId,
    pub nodes: Vec<NodeId>,
    pub value: f64,
}

/// Immutable mesh with an element arena and an id → arena index lookup.
#[derive(Clone, Debug)]
pub struct Mesh {
    nodes: Vec<Node>,
    elements: Vec<ValuedElement>,
    index: HashMap<ElementId, usize>,
}

impl Mesh {
    /// Build a mesh from raw collections.
    ///
    /// - With `options.sanity_check`, dangling node references in elements and
    ///   dangling element references in values are rejected.
    /// - Duplicate value records for one element: the last one wins.
    /// - Elements without a value follow `options.missing_values`.
    /// - Duplicate element ids are always rejected.
    pub fn new(
        nodes: Vec<Node>,
        elements: Vec<Element>,
        values: Vec<ElementValue>,
        options: MeshOptions,
    ) -> Result<Self, MeshError> {
        if options.sanity_check {
            validate_references(&nodes, &elements, &values)?;
        }

        let mut value_of: HashMap<ElementId, f64> = HashMap::with_capacity(values.len());
        for v in &values {
            value_of.insert(v.element_id, v.value);
        }

        let mut arena = Vec::with_capacity(elements.len());
        let mut index = HashMap::with_capacity(elements.len());
        for Element { id, nodes: node_ids } in elements {
            let value = match value_of.get(&id) {
                Some(&value) => value,
                None => match options.missing_values {
                    MissingValuePolicy::Error => return Err(MeshError::MissingValue(id)),
                    MissingValuePolicy::NegativeInfinity => {
                        log::warn!("element {id} has no value; substituting negative infinity");
                        f64::NEG_INFINITY
                    }
                },
            };
            if index.insert(id, arena.len()).is_some() {
                return Err(MeshError::DuplicateElement(id));
            }
            arena.push(ValuedElement {
                id,
                nodes: node_ids,
                value,
            });
        }

        let mesh = Self {
            nodes,
            elements: arena,
            index,
        };
        crate::debug_invariants!(mesh.validate_invariants(), "Mesh::new");
        log::debug!(
            "built mesh: {} nodes, {} elements",
            mesh.nodes.len(),
            mesh.elements.len()
        );
        Ok(mesh)
    }

    /// Build with default options (no sanity check, fail on missing values).
    pub fn try_from_parts(
        nodes: Vec<Node>,
        elements: Vec<Element>,
        values: Vec<ElementValue>,
    ) -> Result<Self, MeshError> {
        Self::new(nodes, elements, values, MeshOptions::default())
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Elements in input order; positions are the arena indices.
    #[inline]
    pub fn elements(&self) -> &[ValuedElement] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Arena index of an element id.
    #[inline]
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn element(&self, id: ElementId) -> Option<&ValuedElement> {
        self.index_of(id).map(|i| &self.elements[i])
    }

    pub fn value_of(&self, id: ElementId) -> Option<f64> {
        self.element(id).map(|e| e.value)
    }
}

impl DebugInvariants for Mesh {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Mesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        ensure(self.index.len() == self.elements.len(), || {
            format!(
                "id lookup has {} entries for {} elements",
                self.index.len(),
                self.elements.len()
            )
        })?;
        for (&id, &i) in &self.index {
            ensure(self.elements.get(i).is_some_and(|e| e.id == id), || {
                format!("id lookup maps element {id} to arena slot {i} holding another element")
            })?;
        }
        Ok(())
    }
}

//! Mesh model: strong ids, the immutable [`Mesh`](mesh::Mesh) arena and the
//! referential sanity checks applied during construction.

pub mod ids;
pub mod mesh;
pub mod validation;

pub use ids::{ElementId, NodeId};
pub use mesh::{Element, ElementValue, Mesh, Node, ValuedElement};

//! # mesh-viewspots
//!
//! mesh-viewspots finds *view spots* in triangulated surface meshes: elements
//! whose scalar value is at least as high as the value of every element they
//! share a node with. The best N view spots are reported highest first, with
//! flat patches of equal-valued neighbours collapsed to a single entry.
//!
//! ## Pipeline
//! 1. [`topology::Mesh`] joins elements with their values (optionally checking
//!    node and element references).
//! 2. [`algs::adjacency`] builds the node → element index and the per-element
//!    neighbourhoods.
//! 3. [`algs::view_spots`] classifies, ranks, deduplicates and truncates.
//!
//! The whole pipeline is a pure function of an immutable mesh, so one mesh
//! can serve any number of concurrent queries.
//!
//! ## Determinism
//!
//! Neighbour lists are sorted, and view spots with equal values are ranked by
//! ascending element id, so results never depend on hash iteration order.
//!
//! ## Usage
//! ```rust
//! use mesh_viewspots::prelude::*;
//!
//! let json = r#"{
//!   "nodes": [{"id": 0}, {"id": 1}, {"id": 2}, {"id": 3}],
//!   "elements": [{"id": 0, "nodes": [0, 1, 2]}, {"id": 1, "nodes": [1, 2, 3]}],
//!   "values": [{"element_id": 0, "value": 0.4}, {"element_id": 1, "value": 0.9}]
//! }"#;
//! let mesh = mesh_from_json_str(json, MeshOptions::strict()).unwrap();
//! let spots = mesh.compute_top_view_spots(Some(1));
//! assert_eq!(spots[0].element_id, ElementId::new(1));
//! ```

pub mod algs;
pub mod config;
pub mod debug_invariants;
pub mod io;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::adjacency::{Neighbourhoods, NodeElementIndex};
    pub use crate::algs::view_spots::{ViewSpot, compute_top_view_spots};
    pub use crate::config::{MeshOptions, MissingValuePolicy};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::io::json::{mesh_from_json_str, read_mesh_file, view_spots_to_json};
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::ids::{ElementId, NodeId};
    pub use crate::topology::mesh::{Element, ElementValue, Mesh, Node};
}

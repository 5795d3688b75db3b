//! Element adjacency through shared nodes.
//!
//! Two elements are neighbours when they reference at least one common node.
//! Adjacency is derived in two steps:
//! 1. [`NodeElementIndex`]: inverted index `node -> elements touching it`.
//! 2. [`Neighbourhoods`]: per element, the union of the index entries of its
//!    nodes, minus the element itself, stored CSR-style.
//!
//! Both tables refer to elements by arena index into [`Mesh::elements`], so
//! no element ever holds a reference to another one.
//!
//! Determinism:
//! - Index entries and neighbour lists are sorted ascending and deduplicated,
//!   independent of hash iteration order.

use hashbrown::HashMap;

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshError;
use crate::topology::ids::{ElementId, NodeId};
use crate::topology::mesh::Mesh;

/// Inverted index from node id to the arena indices of incident elements.
#[derive(Debug, Clone, Default)]
pub struct NodeElementIndex {
    incident: HashMap<NodeId, Vec<usize>>,
}

impl NodeElementIndex {
    /// Index every node referenced by any element of `mesh`.
    ///
    /// An element listing the same node twice appears once in that node's entry.
    pub fn build(mesh: &Mesh) -> Self {
        let mut incident: HashMap<NodeId, Vec<usize>> = HashMap::new();
        incident.reserve(mesh.nodes().len().max(mesh.len()));
        for (i, element) in mesh.elements().iter().enumerate() {
            for &node in &element.nodes {
                incident.entry(node).or_default().push(i);
            }
        }
        // Pushes happen in ascending `i`, so only repeats need removing.
        for list in incident.values_mut() {
            list.dedup();
        }
        Self { incident }
    }

    /// Arena indices of the elements touching `node` (empty if none).
    #[inline]
    pub fn elements_at(&self, node: NodeId) -> &[usize] {
        self.incident.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct nodes referenced by elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.incident.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.incident.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[usize])> {
        self.incident.iter().map(|(&n, list)| (n, list.as_slice()))
    }
}

/// CSR neighbourhood table aligned with [`Mesh::elements`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbourhoods {
    /// CSR offsets into `adjncy` for each element.
    pub xadj: Vec<usize>,
    /// Concatenated neighbour lists (arena indices).
    pub adjncy: Vec<usize>,
}

impl Neighbourhoods {
    /// Build neighbourhoods for `mesh` from a prebuilt node index.
    pub fn build(mesh: &Mesh, index: &NodeElementIndex) -> Self {
        let n = mesh.len();
        let mut xadj = Vec::with_capacity(n + 1);
        let mut adjncy = Vec::new();
        xadj.push(0);

        let mut scratch: Vec<usize> = Vec::new();
        for (i, element) in mesh.elements().iter().enumerate() {
            scratch.clear();
            for &node in &element.nodes {
                scratch.extend_from_slice(index.elements_at(node));
            }
            scratch.sort_unstable();
            scratch.dedup();
            if let Ok(pos) = scratch.binary_search(&i) {
                scratch.remove(pos);
            }
            adjncy.extend_from_slice(&scratch);
            xadj.push(adjncy.len());
        }

        let table = Self { xadj, adjncy };
        crate::debug_invariants!(table.validate_invariants(), "Neighbourhoods::build");
        log::trace!(
            "neighbourhoods: {} elements, {} directed adjacencies",
            n,
            table.adjncy.len()
        );
        table
    }

    /// Build the node index and neighbourhoods in one go.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self::build(mesh, &NodeElementIndex::build(mesh))
    }

    /// Number of elements covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.xadj.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the neighbour index slice for element `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjncy[self.xadj[i]..self.xadj[i + 1]]
    }

    /// Whether elements `i` and `j` share a node.
    #[inline]
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        self.neighbors(i).binary_search(&j).is_ok()
    }

    /// Neighbour ids of element `id`, or `None` if the id is unknown.
    pub fn neighbour_ids(&self, mesh: &Mesh, id: ElementId) -> Option<Vec<ElementId>> {
        let i = mesh.index_of(id)?;
        Some(
            self.neighbors(i)
                .iter()
                .map(|&j| mesh.elements()[j].id)
                .collect(),
        )
    }
}

impl DebugInvariants for Neighbourhoods {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Neighbourhoods");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        ensure(self.xadj.first() == Some(&0), || "CSR offsets must start at 0".into())?;
        ensure(self.xadj.last() == Some(&self.adjncy.len()), || {
            "CSR offsets must end at adjncy.len()".into()
        })?;
        ensure(self.xadj.windows(2).all(|w| w[0] <= w[1]), || {
            "CSR offsets must be non-decreasing".into()
        })?;
        let n = self.len();
        for i in 0..n {
            let list = self.neighbors(i);
            ensure(list.windows(2).all(|w| w[0] < w[1]), || {
                format!("neighbour list of {i} is not sorted and deduplicated")
            })?;
            for &j in list {
                ensure(j < n, || format!("neighbour {j} of {i} out of range"))?;
                ensure(j != i, || format!("element {i} lists itself as neighbour"))?;
                ensure(self.are_adjacent(j, i), || {
                    format!("adjacency {i} -> {j} has no reverse entry")
                })?;
            }
        }
        Ok(())
    }
}

#![allow(dead_code)]
use mesh_viewspots::prelude::*;

pub fn eid(i: i64) -> ElementId {
    ElementId::new(i)
}

/// Build a mesh from `(element id, node ids)` pairs and `(element id, value)` records.
/// Nodes are derived from the element references.
pub fn mesh_from(elements: &[(i64, &[i64])], values: &[(i64, f64)]) -> Mesh {
    try_mesh_from(elements, values, MeshOptions::strict()).unwrap()
}

pub fn try_mesh_from(
    elements: &[(i64, &[i64])],
    values: &[(i64, f64)],
    options: MeshOptions,
) -> Result<Mesh, MeshError> {
    let mut node_ids: Vec<i64> = elements
        .iter()
        .flat_map(|(_, ns)| ns.iter().copied())
        .collect();
    node_ids.sort_unstable();
    node_ids.dedup();
    Mesh::new(
        node_ids.into_iter().map(|i| Node::new(NodeId::new(i))).collect(),
        elements
            .iter()
            .map(|(id, ns)| {
                Element::new(eid(*id), ns.iter().copied().map(NodeId::new).collect::<Vec<_>>())
            })
            .collect(),
        values.iter().map(|&(id, v)| ElementValue::new(eid(id), v)).collect(),
        options,
    )
}

pub const REGULAR_ELEMENTS: [(i64, &[i64]); 4] = [
    (0, &[0, 1, 3]),
    (1, &[0, 2, 3]),
    (2, &[2, 3, 4]),
    (3, &[2, 4, 5]),
];

/// Six nodes, four triangles; `values[i]` belongs to element `i`.
pub fn regular_mesh(values: [f64; 4]) -> Mesh {
    let records: Vec<(i64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as i64, v))
        .collect();
    mesh_from(&REGULAR_ELEMENTS, &records)
}

pub fn ids(spots: &[ViewSpot]) -> Vec<i64> {
    spots.iter().map(|s| s.element_id.get()).collect()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

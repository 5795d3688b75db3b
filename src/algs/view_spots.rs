//! View-spot classification, ranking and plateau deduplication.
//!
//! An element is a *view spot* when its value is greater than or equal to
//! the value of every neighbour (elements sharing a node). Elements without
//! neighbours are view spots vacuously.
//!
//! Ranking sorts view spots by value descending; equal values (with `-0.0`
//! equal to `0.0`) are ordered by ascending [`ElementId`]. Walking that
//! order, a candidate is dropped when it is adjacent to an already kept view
//! spot of exactly the same value. This collapses a flat patch into its
//! first representative while keeping equal peaks elsewhere in the mesh.
//!
//! Everything here is a pure function of an immutable [`Mesh`]; each call
//! allocates its own tables.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::algs::adjacency::Neighbourhoods;
use crate::topology::ids::ElementId;
use crate::topology::mesh::Mesh;

/// One ranked result: an element id and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSpot {
    pub element_id: ElementId,
    pub value: f64,
}

/// Classify every element; the result is aligned with [`Mesh::elements`].
pub fn classify(mesh: &Mesh, neighbourhoods: &Neighbourhoods) -> Vec<bool> {
    (0..mesh.len())
        .map(|i| is_view_spot(mesh, neighbourhoods, i))
        .collect()
}

/// Whether the element at arena index `i` is a view spot.
pub fn is_view_spot(mesh: &Mesh, neighbourhoods: &Neighbourhoods, i: usize) -> bool {
    let elements = mesh.elements();
    let max_neighbour = neighbourhoods
        .neighbors(i)
        .iter()
        .map(|&j| elements[j].value)
        .reduce(f64::max);
    match max_neighbour {
        None => true,
        Some(max) => elements[i].value >= max,
    }
}

/// Arena indices of the view spots, value descending then id ascending.
pub fn rank_view_spots(mesh: &Mesh, flags: &[bool]) -> Vec<usize> {
    let elements = mesh.elements();
    // Adding 0.0 maps -0.0 to 0.0, so signed zeros share one tie-break.
    let key = |i: usize| elements[i].value + 0.0;
    flags
        .iter()
        .positions(|&is_spot| is_spot)
        .sorted_by(|&a, &b| {
            key(b)
                .total_cmp(&key(a))
                .then(elements[a].id.cmp(&elements[b].id))
        })
        .collect()
}

/// Drop ranked view spots adjacent to a kept view spot of the same value.
///
/// `ranked` must be in [`rank_view_spots`] order. At most `limit` indices are
/// returned; `None` keeps all.
pub fn deduplicate_plateaus(
    mesh: &Mesh,
    neighbourhoods: &Neighbourhoods,
    ranked: &[usize],
    limit: Option<usize>,
) -> Vec<usize> {
    let elements = mesh.elements();
    let limit = limit.unwrap_or(ranked.len());
    let mut kept: Vec<usize> = Vec::with_capacity(limit.min(ranked.len()));
    // Equal values are contiguous in `ranked`. `plateau` lists the kept
    // elements of the current value; `in_plateau` marks them by arena index.
    let mut plateau: Vec<usize> = Vec::new();
    let mut in_plateau = vec![false; elements.len()];
    for &i in ranked {
        if kept.len() >= limit {
            break;
        }
        let value = elements[i].value;
        if kept.last().is_none_or(|&k| elements[k].value != value) {
            for k in plateau.drain(..) {
                in_plateau[k] = false;
            }
        }
        if neighbourhoods.neighbors(i).iter().any(|&j| in_plateau[j]) {
            log::trace!(
                "dropping element {} adjacent to an equal-valued view spot",
                elements[i].id
            );
            continue;
        }
        in_plateau[i] = true;
        plateau.push(i);
        kept.push(i);
    }
    kept
}

/// Resolve the requested count: `None` is unbounded, `n <= 0` selects nothing.
pub fn requested_limit(n: Option<i64>) -> Option<usize> {
    match n {
        None => None,
        Some(k) if k <= 0 => Some(0),
        Some(k) => Some(usize::try_from(k).unwrap_or(usize::MAX)),
    }
}

/// Filter, rank, deduplicate and truncate the classified elements.
pub fn select_top_n(
    mesh: &Mesh,
    neighbourhoods: &Neighbourhoods,
    flags: &[bool],
    n: Option<i64>,
) -> Vec<ViewSpot> {
    let ranked = rank_view_spots(mesh, flags);
    let kept = deduplicate_plateaus(mesh, neighbourhoods, &ranked, requested_limit(n));
    log::debug!(
        "view spots: {} candidates, {} after plateau deduplication",
        ranked.len(),
        kept.len()
    );
    kept.into_iter()
        .map(|i| {
            let e = &mesh.elements()[i];
            ViewSpot {
                element_id: e.id,
                value: e.value,
            }
        })
        .collect()
}

/// Top-`n` view spots of `mesh`.
///
/// - `n == None`: every view spot, deduplicated, sorted by value descending.
/// - `n <= 0`: empty.
/// - otherwise: at most `n` entries.
pub fn compute_top_view_spots(mesh: &Mesh, n: Option<i64>) -> Vec<ViewSpot> {
    let neighbourhoods = Neighbourhoods::from_mesh(mesh);
    let flags = classify(mesh, &neighbourhoods);
    select_top_n(mesh, &neighbourhoods, &flags, n)
}

impl Mesh {
    /// See [`compute_top_view_spots`].
    pub fn compute_top_view_spots(&self, n: Option<i64>) -> Vec<ViewSpot> {
        compute_top_view_spots(self, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::ids::NodeId;
    use crate::topology::mesh::{Element, ElementValue, Node};

    fn strip(values: &[f64]) -> Mesh {
        // Triangle strip: element i uses nodes i, i+1, i+2.
        let count = values.len() as i64;
        Mesh::try_from_parts(
            (0..count + 2).map(|i| Node::new(NodeId::new(i))).collect(),
            (0..count)
                .map(|i| Element::new(ElementId::new(i), [i, i + 1, i + 2].map(NodeId::new)))
                .collect(),
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| ElementValue::new(ElementId::new(i as i64), v))
                .collect(),
        )
        .unwrap()
    }

    fn ids(spots: &[ViewSpot]) -> Vec<i64> {
        spots.iter().map(|s| s.element_id.get()).collect()
    }

    #[test]
    fn isolated_element_is_a_view_spot() {
        let mesh = strip(&[-5.0]);
        let nb = Neighbourhoods::from_mesh(&mesh);
        assert_eq!(classify(&mesh, &nb), vec![true]);
    }

    #[test]
    fn ties_with_neighbours_count_as_view_spots() {
        let mesh = strip(&[1.0, 1.0, 0.0, 0.0, 0.0]);
        let nb = Neighbourhoods::from_mesh(&mesh);
        // 4 only sees 2 and 3, both level with it.
        assert_eq!(classify(&mesh, &nb), vec![true, true, false, false, true]);
    }

    #[test]
    fn ranking_breaks_ties_by_ascending_id() {
        let mesh = strip(&[0.5, 0.1, 0.1, 0.1, 0.9, 0.1, 0.1, 0.1, 0.5]);
        let nb = Neighbourhoods::from_mesh(&mesh);
        let flags = classify(&mesh, &nb);
        assert_eq!(rank_view_spots(&mesh, &flags), vec![4, 0, 8]);
    }

    #[test]
    fn plateaus_collapse_to_lowest_id() {
        let mesh = strip(&[2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let spots = mesh.compute_top_view_spots(None);
        // 1 and 2 merge into 0; 6 and 7 merge into 5.
        assert_eq!(ids(&spots), vec![0, 5]);
    }

    #[test]
    fn separate_equal_peaks_are_both_kept() {
        let mesh = strip(&[3.0, 0.0, 0.0, 0.0, 3.0]);
        let spots = compute_top_view_spots(&mesh, None);
        assert_eq!(ids(&spots), vec![0, 4]);
    }

    #[test]
    fn limit_handling() {
        assert_eq!(requested_limit(None), None);
        assert_eq!(requested_limit(Some(0)), Some(0));
        assert_eq!(requested_limit(Some(-3)), Some(0));
        assert_eq!(requested_limit(Some(2)), Some(2));

        let mesh = strip(&[3.0, 0.0, 0.0, 0.0, 3.0]);
        assert!(compute_top_view_spots(&mesh, Some(0)).is_empty());
        assert!(compute_top_view_spots(&mesh, Some(-1)).is_empty());
        assert_eq!(ids(&compute_top_view_spots(&mesh, Some(1))), vec![0]);
        assert_eq!(ids(&compute_top_view_spots(&mesh, Some(10))), vec![0, 4]);
    }

    #[test]
    fn negative_zero_joins_the_zero_plateau() {
        let mesh = strip(&[0.0, -0.0]);
        assert_eq!(ids(&compute_top_view_spots(&mesh, None)), vec![0]);
        // Sign of zero must not override the ascending-id tie-break.
        let mesh = strip(&[-0.0, 0.0]);
        let nb = Neighbourhoods::from_mesh(&mesh);
        let flags = classify(&mesh, &nb);
        assert_eq!(rank_view_spots(&mesh, &flags), vec![0, 1]);
        assert_eq!(ids(&compute_top_view_spots(&mesh, None)), vec![0]);
    }

    #[test]
    fn large_flat_strip_keeps_every_third_element() {
        // Element i touches i-2..=i+2, so the kept representatives are
        // 0, 3, 6, ... and the plateau holds a third of the mesh.
        let count = 60_000;
        let mesh = strip(&vec![0.0; count]);
        let spots = compute_top_view_spots(&mesh, None);
        assert_eq!(spots.len(), count.div_ceil(3));
        assert!(
            spots
                .iter()
                .enumerate()
                .all(|(k, s)| s.element_id.get() == 3 * k as i64)
        );
        let first = compute_top_view_spots(&mesh, Some(5));
        assert_eq!(ids(&first), vec![0, 3, 6, 9, 12]);
    }

    #[test]
    fn empty_mesh_yields_nothing() {
        let mesh = Mesh::try_from_parts(Vec::new(), Vec::new(), Vec::new()).unwrap();
        assert!(compute_top_view_spots(&mesh, None).is_empty());
    }
}

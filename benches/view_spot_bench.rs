use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use mesh_viewspots::algs::adjacency::Neighbourhoods;
use mesh_viewspots::algs::view_spots::compute_top_view_spots;
use mesh_viewspots::config::MeshOptions;
use mesh_viewspots::topology::{Element, ElementId, ElementValue, Mesh, Node, NodeId};

/// Structured triangulation of a `side x side` grid of quads (two triangles each).
/// `levels == 1` makes the whole mesh a single plateau.
fn grid_mesh(side: i64, levels: u8, seed: u64) -> Mesh {
    let mut rng = SmallRng::seed_from_u64(seed);
    let node = |r: i64, c: i64| NodeId::new(r * (side + 1) + c);
    let nodes = (0..(side + 1) * (side + 1))
        .map(|i| {
            let (x, y) = (i % (side + 1), i / (side + 1));
            Node::with_coords(NodeId::new(i), x as f64, y as f64)
        })
        .collect();
    let mut elements = Vec::new();
    let mut values = Vec::new();
    for r in 0..side {
        for c in 0..side {
            for tri in [
                [node(r, c), node(r, c + 1), node(r + 1, c + 1)],
                [node(r, c), node(r + 1, c), node(r + 1, c + 1)],
            ] {
                let id = ElementId::new(elements.len() as i64);
                elements.push(Element::new(id, tri));
                // Quantised values so plateaus occur.
                let level = rng.gen_range(0..levels);
                values.push(ElementValue::new(id, f64::from(level) / f64::from(levels)));
            }
        }
    }
    Mesh::new(nodes, elements, values, MeshOptions::default()).expect("valid grid mesh")
}

fn bench_view_spots(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_spots");

    for &side in &[32i64, 128i64] {
        let mesh = grid_mesh(side, 32, 0xC0FFEE);
        let flat = grid_mesh(side, 1, 0xC0FFEE);

        group.bench_with_input(BenchmarkId::new("neighbourhoods", side), &side, |b, _| {
            b.iter(|| black_box(Neighbourhoods::from_mesh(&mesh)));
        });

        group.bench_with_input(BenchmarkId::new("top_10", side), &side, |b, _| {
            b.iter(|| black_box(compute_top_view_spots(&mesh, Some(10))));
        });

        group.bench_with_input(BenchmarkId::new("all", side), &side, |b, _| {
            b.iter(|| black_box(compute_top_view_spots(&mesh, None)));
        });

        group.bench_with_input(BenchmarkId::new("all_flat", side), &side, |b, _| {
            b.iter(|| black_box(compute_top_view_spots(&flat, None)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view_spots);
criterion_main!(benches);

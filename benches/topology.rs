//! Benchmarks for topology construction and classification.

use criterion::{criterion_group, criterion_main, Criterion};
use polytopo::prelude::*;

/// Build the coordIndex buffer of an n x n quad grid.
fn grid_coord_index(n: usize) -> (usize, Vec<i32>) {
    let num_vertices = (n + 1) * (n + 1);
    let mut coord = Vec::with_capacity(n * n * 5);

    for j in 0..n {
        for i in 0..n {
            let v00 = (j * (n + 1) + i) as i32;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1) as i32;
            let v11 = v01 + 1;

            coord.extend_from_slice(&[v00, v10, v11, v01, -1]);
        }
    }

    (num_vertices, coord)
}

fn bench_halfedge_construction(c: &mut Criterion) {
    let (nv, coord) = grid_coord_index(50);

    c.bench_function("build_grid_50x50", |b| {
        b.iter(|| HalfEdgeMesh::from_coord_index(nv, &coord).unwrap());
    });

    c.bench_function("face_index_grid_50x50", |b| {
        b.iter(|| FaceIndex::new(nv, &coord).unwrap());
    });
}

fn bench_classification(c: &mut Criterion) {
    let (nv, coord) = grid_coord_index(50);

    c.bench_function("classify_grid_50x50", |b| {
        let mesh = HalfEdgeMesh::from_coord_index(nv, &coord).unwrap();
        b.iter(|| PolygonMesh::new(mesh.clone()));
    });

    c.bench_function("is_regular_grid_50x50", |b| {
        let mesh = HalfEdgeMesh::from_coord_index(nv, &coord).unwrap();
        let surface = PolygonMesh::new(mesh);
        b.iter(|| surface.is_regular());
    });
}

fn bench_traversal(c: &mut Criterion) {
    let (nv, coord) = grid_coord_index(50);
    let mesh = HalfEdgeMesh::from_coord_index(nv, &coord).unwrap();

    c.bench_function("next_prev_all_corners", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for i in 0..mesh.num_corners() {
                let c = CornerId::new(i);
                if let Some(n) = mesh.next(c) {
                    debug_assert_eq!(mesh.prev(n), Some(c));
                    count += 1;
                }
            }
            count
        });
    });
}

criterion_group!(
    benches,
    bench_halfedge_construction,
    bench_classification,
    bench_traversal
);
criterion_main!(benches);

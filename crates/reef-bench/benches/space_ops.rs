//! Criterion micro-benchmarks for lattice and occupancy queries.

use criterion::{criterion_group, criterion_main, Criterion};
use reef_core::{Coord, EntityId, Species};
use reef_space::{Connectivity, EdgeBehavior, Lattice, SpatialGrid};
use std::hint::black_box;

/// Benchmark: Moore radius-1 neighbourhood of all 10K cells on a 100x100 torus.
fn bench_neighbourhood_moore_r1_10k(c: &mut Criterion) {
    let lattice = Lattice::new(100, 100, EdgeBehavior::Wrap).unwrap();

    c.bench_function("neighbourhood_moore_r1_10k", |b| {
        b.iter(|| {
            for y in 0..100 {
                for x in 0..100 {
                    let n = lattice.neighbourhood(Coord::new(x, y), 1, Connectivity::Moore, false);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: the turtle's sensing query (Moore radius 5) on a bounded grid.
fn bench_neighbourhood_moore_r5_bounded(c: &mut Criterion) {
    let lattice = Lattice::new(100, 100, EdgeBehavior::Absorb).unwrap();

    c.bench_function("neighbourhood_moore_r5_bounded", |b| {
        b.iter(|| {
            for y in (0..100).step_by(7) {
                for x in (0..100).step_by(7) {
                    let n = lattice.neighbourhood(Coord::new(x, y), 5, Connectivity::Moore, true);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: occupant lookup around every cell of a half-filled grid.
fn bench_neighbours_half_full(c: &mut Criterion) {
    let lattice = Lattice::new(100, 100, EdgeBehavior::Absorb).unwrap();
    let mut grid = SpatialGrid::new(lattice);
    for i in 0..5_000u64 {
        let at = Coord::new((i * 37 % 100) as i32, (i * 91 % 100) as i32);
        let species = if i % 3 == 0 { Species::Fish } else { Species::Plankton };
        grid.place(EntityId(i), species, at).unwrap();
    }

    c.bench_function("neighbours_half_full", |b| {
        b.iter(|| {
            for y in 0..100 {
                for x in 0..100 {
                    let n = grid.neighbours(Coord::new(x, y), 1, Connectivity::Moore, true);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: relocating 1000 entities one cell to the right and back.
fn bench_move_1000(c: &mut Criterion) {
    let lattice = Lattice::new(100, 100, EdgeBehavior::Wrap).unwrap();
    let mut grid = SpatialGrid::new(lattice);
    for i in 0..1000u64 {
        grid.place(EntityId(i), Species::Fish, Coord::new((i % 100) as i32, (i / 100) as i32))
            .unwrap();
    }

    c.bench_function("move_1000", |b| {
        b.iter(|| {
            for dx in [1, -1] {
                for i in 0..1000u64 {
                    let from = grid.position_of(EntityId(i)).unwrap();
                    let to = Coord::new((from.x + dx).rem_euclid(100), from.y);
                    black_box(grid.move_to(EntityId(i), to).unwrap());
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_neighbourhood_moore_r1_10k,
    bench_neighbourhood_moore_r5_bounded,
    bench_neighbours_half_full,
    bench_move_1000
);
criterion_main!(benches);

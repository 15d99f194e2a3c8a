use reef_core::{Coord, EntityId, Species};
use reef_space::{Connectivity, EdgeBehavior, Lattice, SpaceError, SpatialGrid};

#[test]
fn interior_sizes_match_closed_forms() {
    let l = Lattice::new(21, 21, EdgeBehavior::Absorb).unwrap();
    let center = Coord::new(10, 10);
    for r in 0..=5 {
        for conn in [Connectivity::Moore, Connectivity::VonNeumann] {
            assert_eq!(
                l.neighbourhood(center, r, conn, false).len(),
                conn.interior_size(r),
                "{conn:?} radius {r}"
            );
        }
    }
}

#[test]
fn bounded_corner_sizes_are_clipped() {
    let l = Lattice::new(10, 10, EdgeBehavior::Absorb).unwrap();
    let corner = Coord::new(0, 0);
    // Quarter of the (2r+1)^2 square, minus the center.
    assert_eq!(l.neighbourhood(corner, 3, Connectivity::Moore, false).len(), 15);
    // Manhattan ball quadrant: (r+1)(r+2)/2 - 1.
    assert_eq!(
        l.neighbourhood(corner, 3, Connectivity::VonNeumann, false).len(),
        9
    );
}

#[test]
fn torus_sizes_are_uniform() {
    let l = Lattice::new(12, 12, EdgeBehavior::Wrap).unwrap();
    for coord in l.canonical_ordering() {
        assert_eq!(l.neighbourhood(coord, 5, Connectivity::Moore, false).len(), 120);
    }
}

#[test]
fn grid_rejects_placement_outside_lattice() {
    let mut g = SpatialGrid::new(Lattice::new(5, 5, EdgeBehavior::Wrap).unwrap());
    // Wrap governs neighbourhoods, not placement.
    assert!(matches!(
        g.place(EntityId(1), Species::Plankton, Coord::new(5, 0)),
        Err(SpaceError::CoordOutOfBounds { .. })
    ));
}

#[test]
fn neighbourhood_cells_across_wrap_seam() {
    let mut g = SpatialGrid::new(Lattice::new(5, 5, EdgeBehavior::Wrap).unwrap());
    g.place(EntityId(1), Species::JellyfishMedusa, Coord::new(4, 4))
        .unwrap();
    let n = g.neighbours(Coord::new(0, 0), 1, Connectivity::Moore, false);
    assert_eq!(n, vec![(EntityId(1), Species::JellyfishMedusa)]);
    let n = g.neighbours(Coord::new(0, 0), 1, Connectivity::VonNeumann, false);
    assert!(n.is_empty());
}

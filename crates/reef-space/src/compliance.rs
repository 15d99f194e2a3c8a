//! Lattice neighbourhood compliance helpers.
//!
//! These functions verify that neighbourhood enumeration satisfies the
//! invariants the simulation relies on. Reused across edge behaviours,
//! connectivities, and radii.

use crate::connectivity::Connectivity;
use crate::lattice::Lattice;
use indexmap::IndexSet;

/// Assert that no neighbourhood contains the same cell twice.
pub fn assert_no_duplicates(lattice: &Lattice, conn: Connectivity, radius: u32) {
    for center in lattice.canonical_ordering() {
        for include_center in [false, true] {
            let n = lattice.neighbourhood(center, radius, conn, include_center);
            let unique: IndexSet<_> = n.iter().copied().collect();
            assert_eq!(
                unique.len(),
                n.len(),
                "duplicate cells in N({center}, r={radius}, {conn:?})"
            );
        }
    }
}

/// Assert that every returned cell is in bounds.
pub fn assert_all_in_bounds(lattice: &Lattice, conn: Connectivity, radius: u32) {
    for center in lattice.canonical_ordering() {
        for nb in lattice.neighbourhood(center, radius, conn, true) {
            assert!(
                lattice.contains(nb),
                "N({center}) returned out-of-bounds cell {nb}"
            );
        }
    }
}

/// Assert that `include_center` adds exactly the center and nothing else.
pub fn assert_center_handling(lattice: &Lattice, conn: Connectivity, radius: u32) {
    for center in lattice.canonical_ordering() {
        let without = lattice.neighbourhood(center, radius, conn, false);
        let with = lattice.neighbourhood(center, radius, conn, true);
        assert!(
            !without.contains(&center),
            "N({center}) contains its own center"
        );
        assert!(with.contains(&center), "N+({center}) misses its center");
        assert_eq!(with.len(), without.len() + 1);
    }
}

/// Assert that every neighbour lies within `radius` under the lattice metric.
pub fn assert_within_radius(lattice: &Lattice, conn: Connectivity, radius: u32) {
    for center in lattice.canonical_ordering() {
        for nb in lattice.neighbourhood(center, radius, conn, false) {
            let d = lattice.distance(center, nb, conn);
            assert!(
                d <= radius,
                "{nb} in N({center}, r={radius}) but distance is {d}"
            );
        }
    }
}

/// Assert that `b in N(a)` implies `a in N(b)`.
pub fn assert_neighbourhood_symmetric(lattice: &Lattice, conn: Connectivity, radius: u32) {
    for a in lattice.canonical_ordering() {
        for b in lattice.neighbourhood(a, radius, conn, false) {
            assert!(
                lattice.neighbourhood(b, radius, conn, false).contains(&a),
                "neighbour symmetry violated: {b} in N({a}) but {a} not in N({b})"
            );
        }
    }
}

/// Assert that two calls return the same cells in the same order.
pub fn assert_deterministic(lattice: &Lattice, conn: Connectivity, radius: u32) {
    for center in lattice.canonical_ordering() {
        assert_eq!(
            lattice.neighbourhood(center, radius, conn, true),
            lattice.neighbourhood(center, radius, conn, true),
            "neighbourhood of {center} is non-deterministic"
        );
    }
}

/// Run the full compliance suite for one connectivity and radius.
pub fn run_full_compliance(lattice: &Lattice, conn: Connectivity, radius: u32) {
    assert_no_duplicates(lattice, conn, radius);
    assert_all_in_bounds(lattice, conn, radius);
    assert_center_handling(lattice, conn, radius);
    assert_within_radius(lattice, conn, radius);
    assert_neighbourhood_symmetric(lattice, conn, radius);
    assert_deterministic(lattice, conn, radius);
}

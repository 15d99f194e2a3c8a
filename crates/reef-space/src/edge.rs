//! Spatial edge (boundary) behavior for the lattice.

use serde::{Deserialize, Serialize};

/// How the lattice handles neighbourhoods that reach past its edges.
///
/// Fixed when the lattice is constructed and applied uniformly to every
/// query.
///
/// # Examples
///
/// ```
/// use reef_core::Coord;
/// use reef_space::{Connectivity, EdgeBehavior, Lattice};
///
/// // Absorb: the corner of a bounded grid has 3 Moore neighbours.
/// let bounded = Lattice::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// let corner = Coord::new(0, 0);
/// assert_eq!(bounded.neighbourhood(corner, 1, Connectivity::Moore, false).len(), 3);
///
/// // Wrap: every cell has 8 (torus).
/// let torus = Lattice::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(torus.neighbourhood(corner, 1, Connectivity::Moore, false).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeBehavior {
    /// Out-of-bounds cells are omitted (fewer neighbours at edges).
    #[default]
    Absorb,
    /// Out-of-bounds cells wrap to the opposite side (toroidal).
    Wrap,
}

impl EdgeBehavior {
    /// `Wrap` when `torus` is set, `Absorb` otherwise.
    pub fn from_torus(torus: bool) -> Self {
        if torus {
            EdgeBehavior::Wrap
        } else {
            EdgeBehavior::Absorb
        }
    }
}

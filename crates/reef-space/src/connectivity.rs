//! Neighbourhood shapes.

use serde::{Deserialize, Serialize};

/// Which offsets count as "within radius `r`".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// 4-connected. Radius `r` is the Manhattan ball `|dx| + |dy| <= r`.
    VonNeumann,
    /// 8-connected. Radius `r` is the Chebyshev ball `max(|dx|, |dy|) <= r`.
    #[default]
    Moore,
}

impl Connectivity {
    /// Whether the offset `(dx, dy)` lies inside the radius-`r` ball.
    #[inline]
    pub fn contains_offset(self, dx: i64, dy: i64, radius: u32) -> bool {
        let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());
        let r = u64::from(radius);
        match self {
            Connectivity::VonNeumann => ax <= r && ay <= r - ax,
            Connectivity::Moore => ax.max(ay) <= r,
        }
    }

    /// Combine two per-axis distances into this connectivity's metric.
    #[inline]
    pub fn combine(self, dx: u32, dy: u32) -> u32 {
        match self {
            Connectivity::VonNeumann => dx + dy,
            Connectivity::Moore => dx.max(dy),
        }
    }

    /// Neighbour count of an interior cell at `radius`, center excluded.
    ///
    /// Moore: `(2r+1)^2 - 1`. Von Neumann: `2r(r+1)`.
    pub fn interior_size(self, radius: u32) -> usize {
        let r = radius as usize;
        match self {
            Connectivity::VonNeumann => 2 * r * (r + 1),
            Connectivity::Moore => (2 * r + 1) * (2 * r + 1) - 1,
        }
    }
}

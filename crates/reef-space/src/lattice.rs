//! Finite 2-D lattice topology.

use crate::connectivity::Connectivity;
use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use indexmap::IndexSet;
use reef_core::Coord;

/// A `width * height` lattice of cells with a fixed [`EdgeBehavior`].
///
/// Each cell has coordinate `(x, y)` with `x` in `0..width` and `y` in
/// `0..height`. Neighbourhoods are computed on demand from offsets; the
/// lattice stores no per-cell data.
///
/// Neighbourhood enumeration walks offsets row-major (`dy` outer, `dx`
/// inner, both ascending), so results are deterministic for a given
/// center, radius, and connectivity. Under `Wrap`, a radius large enough
/// to reach around an axis would revisit cells; those repeats are dropped
/// and a neighbourhood that excludes its center never contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    width: u32,
    height: u32,
    edge: EdgeBehavior,
}

impl Lattice {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new lattice with `width * height` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            edge,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `coord` names a cell of this lattice.
    pub fn contains(&self, coord: Coord) -> bool {
        grid2d::check_2d_bounds(coord, self.width, self.height).is_ok()
    }

    /// Return `Ok(())` if `coord` is in bounds, a descriptive error otherwise.
    pub fn check_bounds(&self, coord: Coord) -> Result<(), SpaceError> {
        grid2d::check_2d_bounds(coord, self.width, self.height)
    }

    /// Map an arbitrary coordinate onto the lattice under the edge behavior.
    ///
    /// `None` when the edge behavior is `Absorb` and `coord` lies outside.
    pub fn resolve(&self, coord: Coord) -> Option<Coord> {
        let x = grid2d::resolve_axis(coord.x, self.width, self.edge)?;
        let y = grid2d::resolve_axis(coord.y, self.height, self.edge)?;
        Some(Coord::new(x, y))
    }

    /// Row-major rank of an in-bounds coordinate.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Inverse of [`rank`](Self::rank). `rank` must be below `cell_count()`.
    pub fn coord_of(&self, rank: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((rank % w) as i32, (rank / w) as i32)
    }

    /// All cells in row-major order.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        grid2d::canonical_ordering_2d(self.width, self.height)
    }

    /// Distance between two cells under `connectivity`, respecting wrap.
    pub fn distance(&self, a: Coord, b: Coord, connectivity: Connectivity) -> u32 {
        let dx = grid2d::axis_distance(a.x, b.x, self.width, self.edge);
        let dy = grid2d::axis_distance(a.y, b.y, self.height, self.edge);
        connectivity.combine(dx, dy)
    }

    /// Cells within `radius` of `center`.
    ///
    /// `center` itself is included only when `include_center` is set. A
    /// center outside the lattice is not an error: under `Absorb` the
    /// result is clipped to whatever in-bounds cells the radius reaches.
    pub fn neighbourhood(
        &self,
        center: Coord,
        radius: u32,
        connectivity: Connectivity,
        include_center: bool,
    ) -> Vec<Coord> {
        let Some((xlo, xhi)) = grid2d::axis_offsets(center.x, self.width, radius, self.edge) else {
            return Vec::new();
        };
        let Some((ylo, yhi)) = grid2d::axis_offsets(center.y, self.height, radius, self.edge)
        else {
            return Vec::new();
        };
        let span = |lo: i64, hi: i64| (hi - lo + 1) as usize;
        let mut out = Vec::with_capacity(span(xlo, xhi) * span(ylo, yhi));

        // Under Wrap the walk starts from the resolved center; every step is
        // i64 arithmetic reduced modulo the extent.
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        let may_repeat = self.edge == EdgeBehavior::Wrap
            && (span(xlo, xhi) as i64 > w || span(ylo, yhi) as i64 > h);
        let home = self.resolve(center).unwrap_or(center);
        let (hx, hy) = (i64::from(home.x), i64::from(home.y));

        for dy in ylo..=yhi {
            for dx in xlo..=xhi {
                if dx == 0 && dy == 0 && !include_center {
                    continue;
                }
                if !connectivity.contains_offset(dx, dy, radius) {
                    continue;
                }
                // Absorb ranges are already clipped to `0..extent`.
                let c = match self.edge {
                    EdgeBehavior::Absorb => Coord::new((hx + dx) as i32, (hy + dy) as i32),
                    EdgeBehavior::Wrap => {
                        Coord::new((hx + dx).rem_euclid(w) as i32, (hy + dy).rem_euclid(h) as i32)
                    }
                };
                if !include_center && may_repeat && c == home {
                    continue;
                }
                out.push(c);
            }
        }

        if may_repeat {
            let unique: IndexSet<Coord> = out.into_iter().collect();
            return unique.into_iter().collect();
        }
        out
    }
}

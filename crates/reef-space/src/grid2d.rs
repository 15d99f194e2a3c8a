//! Axis helpers shared by lattice queries.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use reef_core::Coord;

/// Check that a coordinate is in bounds.
pub(crate) fn check_2d_bounds(coord: Coord, width: u32, height: u32) -> Result<(), SpaceError> {
    if coord.x < 0 || coord.x >= width as i32 || coord.y < 0 || coord.y >= height as i32 {
        return Err(SpaceError::CoordOutOfBounds {
            coord,
            bounds: format!("[0, {width}) x [0, {height})"),
        });
    }
    Ok(())
}

/// Row-major canonical ordering: `(0,0), (1,0), ..., (width-1, height-1)`.
pub(crate) fn canonical_ordering_2d(width: u32, height: u32) -> Vec<Coord> {
    let mut out = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            out.push(Coord::new(x, y));
        }
    }
    out
}

/// Resolve a single axis value under the given edge behavior.
/// Returns `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n)),
    }
}

/// 1D distance along a single axis, accounting for wrap.
pub(crate) fn axis_distance(a: i32, b: i32, len: u32, edge: EdgeBehavior) -> u32 {
    let diff = (i64::from(a) - i64::from(b)).unsigned_abs();
    match edge {
        EdgeBehavior::Wrap => {
            let diff = (diff % u64::from(len)) as u32;
            diff.min(len - diff)
        }
        EdgeBehavior::Absorb => u32::try_from(diff).unwrap_or(u32::MAX),
    }
}

/// Inclusive offset range `lo..=hi` worth visiting along one axis.
///
/// Under `Absorb` the range is clipped so `center + offset` stays in
/// `0..len`; `None` when no offset lands in bounds. Under `Wrap` the
/// range is capped at `len - 1` on each side, since any longer offset
/// reaches a cell a shorter one already does.
pub(crate) fn axis_offsets(
    center: i32,
    len: u32,
    radius: u32,
    edge: EdgeBehavior,
) -> Option<(i64, i64)> {
    let r = i64::from(radius);
    let len = i64::from(len);
    match edge {
        EdgeBehavior::Absorb => {
            let c = i64::from(center);
            let lo = (-r).max(-c);
            let hi = r.min(len - 1 - c);
            (lo <= hi).then_some((lo, hi))
        }
        EdgeBehavior::Wrap => {
            let r = r.min(len - 1);
            Some((-r, r))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_absorb_drops_outside() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(4, 5, EdgeBehavior::Absorb), Some(4));
    }

    #[test]
    fn resolve_axis_wrap_is_periodic() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), Some(4));
        assert_eq!(resolve_axis(7, 5, EdgeBehavior::Wrap), Some(2));
        assert_eq!(resolve_axis(-11, 5, EdgeBehavior::Wrap), Some(4));
    }

    #[test]
    fn axis_distance_wraps_short_way() {
        assert_eq!(axis_distance(0, 4, 5, EdgeBehavior::Wrap), 1);
        assert_eq!(axis_distance(0, 4, 5, EdgeBehavior::Absorb), 4);
    }

    #[test]
    fn axis_distance_handles_extreme_coordinates() {
        assert_eq!(axis_distance(i32::MIN, i32::MAX, 5, EdgeBehavior::Absorb), u32::MAX);
        assert_eq!(axis_distance(i32::MAX, i32::MIN, 7, EdgeBehavior::Wrap), 3);
    }

    #[test]
    fn axis_offsets_clip_to_the_lattice() {
        assert_eq!(axis_offsets(0, 5, 2, EdgeBehavior::Absorb), Some((0, 2)));
        assert_eq!(axis_offsets(4, 5, 2, EdgeBehavior::Absorb), Some((-2, 0)));
        assert_eq!(axis_offsets(2, 5, 4000, EdgeBehavior::Absorb), Some((-2, 2)));
        assert_eq!(axis_offsets(-3, 5, 2, EdgeBehavior::Absorb), None);
        assert_eq!(axis_offsets(i32::MAX, 5, 2, EdgeBehavior::Absorb), None);
    }

    #[test]
    fn axis_offsets_cap_wrap_at_the_extent() {
        assert_eq!(axis_offsets(1, 3, 4000, EdgeBehavior::Wrap), Some((-2, 2)));
        assert_eq!(axis_offsets(1, 10, 3, EdgeBehavior::Wrap), Some((-3, 3)));
    }

    #[test]
    fn canonical_ordering_is_row_major() {
        let o = canonical_ordering_2d(3, 2);
        assert_eq!(o[0], Coord::new(0, 0));
        assert_eq!(o[1], Coord::new(1, 0));
        assert_eq!(o[3], Coord::new(0, 1));
        assert_eq!(o.len(), 6);
    }
}

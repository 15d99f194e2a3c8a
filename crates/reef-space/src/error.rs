//! Error types for space operations.

use reef_core::{Coord, EntityId};
use std::fmt;

/// Errors arising from lattice construction or occupancy updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a lattice with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which dimension (e.g. "width", "height").
        name: &'static str,
        /// The value that was requested.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The entity is already placed on the grid.
    AlreadyPlaced {
        /// The entity.
        id: EntityId,
        /// Where it currently sits.
        at: Coord,
    },
    /// The entity is not placed on the grid.
    NotPlaced {
        /// The entity.
        id: EntityId,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::AlreadyPlaced { id, at } => {
                write!(f, "entity {id} is already placed at {at}")
            }
            Self::NotPlaced { id } => write!(f, "entity {id} is not placed"),
        }
    }
}

impl std::error::Error for SpaceError {}

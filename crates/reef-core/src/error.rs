//! Error types shared across Reef crates.

use std::error::Error;
use std::fmt;

use crate::id::{Coord, EntityId};
use crate::species::Species;

/// The grid and the entity registry disagree.
///
/// Never expected at runtime: every mutation goes through the world's
/// spawn/despawn/relocate paths, which update both sides together. A
/// value of this type indicates a defect in the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// An entity exists in the registry but occupies no cell.
    UnplacedEntity {
        /// The unplaced entity.
        id: EntityId,
    },
    /// A cell lists an occupant the registry does not know.
    OrphanedOccupant {
        /// The unknown occupant.
        id: EntityId,
        /// The cell that lists it.
        at: Coord,
    },
    /// The registry and the grid record different cells for one entity.
    PositionMismatch {
        /// The entity.
        id: EntityId,
        /// Position stored on the entity.
        recorded: Coord,
        /// Cell that actually lists it.
        found: Coord,
    },
    /// A cell records an occupant under the wrong species.
    SpeciesMismatch {
        /// The entity.
        id: EntityId,
        /// Species derived from the entity record.
        recorded: Species,
        /// Species cached in the cell.
        found: Species,
    },
    /// Total live entities differ from total grid placements.
    CountMismatch {
        /// Entities in the registry.
        registry: usize,
        /// Placements in the grid.
        grid: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnplacedEntity { id } => {
                write!(f, "entity {id} is registered but not placed on the grid")
            }
            Self::OrphanedOccupant { id, at } => {
                write!(f, "cell {at} lists unregistered entity {id}")
            }
            Self::PositionMismatch {
                id,
                recorded,
                found,
            } => {
                write!(f, "entity {id} records position {recorded} but occupies {found}")
            }
            Self::SpeciesMismatch {
                id,
                recorded,
                found,
            } => {
                write!(f, "entity {id} is {recorded} but its cell records {found}")
            }
            Self::CountMismatch { registry, grid } => {
                write!(
                    f,
                    "registry holds {registry} entities but grid holds {grid} placements"
                )
            }
        }
    }
}

impl Error for InvariantViolation {}

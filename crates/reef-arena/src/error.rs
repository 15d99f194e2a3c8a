//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use reef_core::EntityId;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// An entity with this id is already live.
    DuplicateId {
        /// The id.
        id: EntityId,
    },
    /// The id was never handed out by [`allocate_id`](crate::EntityArena::allocate_id).
    UnallocatedId {
        /// The id.
        id: EntityId,
        /// The next id the arena would allocate.
        next: EntityId,
    },
    /// No live entity has this id.
    UnknownEntity {
        /// The id.
        id: EntityId,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "entity {id} is already live"),
            Self::UnallocatedId { id, next } => {
                write!(f, "entity {id} was never allocated (next id is {next})")
            }
            Self::UnknownEntity { id } => write!(f, "unknown entity: {id}"),
        }
    }
}

impl Error for ArenaError {}

//! Entity storage for Reef simulations.
//!
//! [`Entity`] is the shared core record (id, position, energy, maturity
//! counter) plus a closed [`EntityKind`] payload per species.
//! [`EntityArena`] owns every live entity in a slab with a free list,
//! indexes them by species, and hands out monotonically increasing
//! [`EntityId`](reef_core::EntityId)s.
//!
//! The arena knows nothing about cells. Keeping the grid and the arena in
//! agreement is the world's job.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod entity;
pub mod error;
pub mod registry;

pub use entity::{Entity, EntityKind, NewEntity};
pub use error::ArenaError;
pub use registry::EntityArena;

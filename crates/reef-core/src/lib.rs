//! Core types for the Reef food-web simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other Reef crate: entity and tick
//! identifiers, lattice coordinates, the closed set of species, and the
//! invariant-violation error reported when the grid and the entity
//! registry disagree.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod species;

pub use error::InvariantViolation;
pub use id::{Coord, EntityId, TickId};
pub use species::{Sex, Species};

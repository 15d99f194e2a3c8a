//! Spatial data structures for Reef simulations.
//!
//! Two layers:
//!
//! - [`Lattice`]: the finite 2-D topology. Answers "which cells are within
//!   radius `r` of this one" under a fixed [`EdgeBehavior`] and a
//!   per-query [`Connectivity`].
//! - [`SpatialGrid`]: a lattice plus cell occupancy. Tracks which entities
//!   sit in which cell and answers occupancy questions (empty, open,
//!   contents, occupants of a neighbourhood).
//!
//! Neither layer knows anything about entity state beyond an id and a
//! species tag; entity records live in `reef-arena`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod edge;
pub mod error;
mod grid2d;
pub mod lattice;
pub mod occupancy;

#[cfg(test)]
pub(crate) mod compliance;

pub use connectivity::Connectivity;
pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use lattice::Lattice;
pub use occupancy::{CellContents, SpatialGrid};
